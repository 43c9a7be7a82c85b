//! Docker adapters for the aitools core ports.
//!
//! - [`DockerExec`] runs runtime commands with `docker exec`
//! - [`DockerInstallProbe`] reports container status with `docker inspect`

#![deny(unsafe_code)]

mod docker;
mod docker_exec;
mod install_probe;

pub use docker::DEFAULT_DOCKER_BINARY;
pub use docker_exec::DockerExec;
pub use install_probe::DockerInstallProbe;
