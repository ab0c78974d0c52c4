use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
extern crate dotenv;
use dotenv::dotenv;


#[derive(Clone, Debug)]
pub struct AppSettings {
    pub host: IpAddr,
    pub port: u16,
    pub counter_file: PathBuf,
    pub static_dir: PathBuf,
    /// How deep the static directory is printed at startup, negative for no limit.
    pub tree_depth: i32,
    pub api_base_url: String,
    pub request_timeout: Duration
}

impl AppSettings {
    pub fn new() -> Self {
        dotenv().ok();

        let host = var_or("host", IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = var_or("port", 8080u16);
        let counter_file = match env::var("counter_file") {
            Ok(v) => PathBuf::from(v),
            Err(_) => PathBuf::from("counter.txt"),
        };
        let static_dir = match env::var("static_dir") {
            Ok(v) => PathBuf::from(v),
            Err(_) => PathBuf::from("web/build"),
        };
        let tree_depth = var_or("tree_depth", 1i32);
        let api_base_url = match env::var("api_base_url") {
            Ok(v) => v,
            Err(_) => format!("http://{host}:{port}"),
        };
        let request_timeout = Duration::from_millis(var_or("request_timeout_ms", 5000u64));

        AppSettings {
            host,
            port,
            counter_file,
            static_dir,
            tree_depth,
            api_base_url,
            request_timeout
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(v) => v.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
