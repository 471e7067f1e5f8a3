// 領域層：核心模型與介面

pub mod model;
pub mod ports;
