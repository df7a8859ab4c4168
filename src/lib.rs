//! Visuai - EPUB 章节插图与朗读服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 目录、章节位置、目录遍历
//! - 章节分类与生成结果
//!
//! 应用层 (application/):
//! - Ports: 远程服务、书籍文档、内存存储
//! - Pipeline: 单章处理流水线（音频与图片链并发）
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: BookStore, AudioStore 内存实现
//! - Worker: 闲置资源回收
//! - Adapters: EPUB 解析、远程服务 HTTP 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
