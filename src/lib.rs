//! Registration wizard
//!
//! 多角色注册向导：启动、依赖装配与命令行。

pub mod adapters;
pub mod bootstrap;
pub mod cli;
