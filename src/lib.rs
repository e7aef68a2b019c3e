// 配送链（ParcelTrack）
// 单向链表的一个小应用：每个节点是一个中转站，带名字、与上一站的距离、到达的小时数
// 链表只对外提供插入、遍历、查找、删除和瓶颈扫描，打印交给调用方给的输出流

pub mod chain;
pub mod config;
pub mod error;
pub mod hub;

pub use chain::{ Bottleneck, DeliveryChain };
pub use config::ChainConfig;
pub use error::ChainError;
pub use hub::Hub;
