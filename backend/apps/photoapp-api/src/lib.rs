//! # PhotoApp API ライブラリ
//!
//! ルーター・ハンドラ・ユースケースを公開する。
//! `main.rs` はここで組み立てたルーターを起動するだけにする。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
