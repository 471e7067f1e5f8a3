// 適配器層：領域介面的具體實作

pub mod storage;

pub use storage::LocalStorage;
