use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Host name that selects the system resolver instead of a remote server.
pub const LOCALHOST: &str = "localhost";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Udp,
    Tcp,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Udp => "udp",
            Network::Tcp => "tcp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointHost {
    Ip(IpAddr),
    Domain(Arc<str>),
}

impl fmt::Display for EndpointHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointHost::Ip(IpAddr::V6(ip)) => write!(f, "[{}]", ip),
            EndpointHost::Ip(ip) => write!(f, "{}", ip),
            EndpointHost::Domain(name) => f.write_str(name),
        }
    }
}

/// Address of an upstream DNS server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub network: Network,
    pub host: EndpointHost,
    pub port: u16,
}

impl Endpoint {
    pub fn new(network: Network, host: EndpointHost, port: u16) -> Self {
        Self {
            network,
            host,
            port,
        }
    }

    pub fn udp(ip: IpAddr, port: u16) -> Self {
        Self::new(Network::Udp, EndpointHost::Ip(ip), port)
    }

    /// Parses a server address such as `8.8.8.8`, `tcp://1.1.1.1:853`,
    /// `[2001:4860:4860::8888]` or `localhost`.
    ///
    /// `port` takes precedence over a port embedded in `address`; when both
    /// are absent the standard DNS port is used.
    pub fn parse(address: &str, port: Option<u16>) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidAddress(address.to_string());

        let trimmed = address.trim();
        let (network, rest) = split_scheme(trimmed).ok_or_else(invalid)?;

        if rest.eq_ignore_ascii_case(LOCALHOST) {
            return Ok(Self::new(
                network,
                EndpointHost::Domain(Arc::from(LOCALHOST)),
                port.unwrap_or(DEFAULT_DNS_PORT),
            ));
        }

        if let Ok(ip) = rest.parse::<IpAddr>() {
            return Ok(Self::new(
                network,
                EndpointHost::Ip(ip),
                port.unwrap_or(DEFAULT_DNS_PORT),
            ));
        }

        if let Some(inner) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let ip: IpAddr = inner.parse().map_err(|_| invalid())?;
            return Ok(Self::new(
                network,
                EndpointHost::Ip(ip),
                port.unwrap_or(DEFAULT_DNS_PORT),
            ));
        }

        let socket: SocketAddr = rest.parse().map_err(|_| invalid())?;
        Ok(Self::new(
            network,
            EndpointHost::Ip(socket.ip()),
            port.unwrap_or(socket.port()),
        ))
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self.host {
            EndpointHost::Ip(ip) => Some(SocketAddr::new(ip, self.port)),
            EndpointHost::Domain(_) => None,
        }
    }

    pub fn is_localhost(&self) -> bool {
        matches!(&self.host, EndpointHost::Domain(name) if name.as_ref() == LOCALHOST)
    }
}

fn split_scheme(address: &str) -> Option<(Network, &str)> {
    match address.split_once("://") {
        None => Some((Network::Udp, address)),
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("udp") => Some((Network::Udp, rest)),
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("tcp") => Some((Network::Tcp, rest)),
        Some(_) => None,
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.network.as_str(), self.host, self.port)
    }
}
