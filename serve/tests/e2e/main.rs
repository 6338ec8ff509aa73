//! End-to-end tests: the proxy on 127.0.0.1:0 in front of a fake Messages API.

mod common;
mod generate;
mod health;
mod init_logging;
mod scenario;
