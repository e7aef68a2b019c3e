// 配送链：单向链表
// 只有head，没有尾指针，所以尾插要走到底，O(n)
// 每个节点只被前一个节点（或head）独占，用Box就够了，不需要Rc/RefCell或裸指针

// 反向打印不能靠反向链接（节点只有next）
// 递归到底再回溯打印会受栈深度限制，这里用堆上的Vec当显式栈
use std::fmt;
use std::io::{ self, Write };

use log::{ debug, trace, warn };
use serde::Serialize;

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::hub::Hub;

pub struct DeliveryChain {
    head: Link,
    len: usize,
    config: ChainConfig,
}

type Link = Option<Box<Node>>;

struct Node {
    hub: Hub,
    next: Link,
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

// 瓶颈：相邻两站之间小时差最大（且为正）的那一对
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bottleneck {
    pub from: String,
    pub to: String,
    pub gap: i32,
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bottleneck found: {} to {}, Hours spent: {}", self.from, self.to, self.gap)
    }
}

impl DeliveryChain {
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    pub fn with_config(config: ChainConfig) -> Self {
        DeliveryChain {
            head: None,
            len: 0,
            config,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // 先建好hub再动链表，出错时链表不变
    // 名字缓冲区申请失败会返回OutOfMemory；但Box::new申请节点失败在stable上没法捕获，仍然会abort
    pub fn insert_front(&mut self, name: &str, distance: u32, hour: u8) -> Result<(), ChainError> {
        let hub = Hub::new(name, distance, hour, &self.config)?;
        debug!("insert_front: {}", hub);
        self.head = Some(
            Box::new(Node {
                hub,
                next: self.head.take(),
            })
        );
        self.len += 1;
        Ok(())
    }

    // 申请失败的处理同insert_front
    pub fn insert_back(&mut self, name: &str, distance: u32, hour: u8) -> Result<(), ChainError> {
        let hub = Hub::new(name, distance, hour, &self.config)?;
        debug!("insert_back: {}", hub);

        // 走到最后一个空链接
        // link每次都是上一个借用的再借用，循环结束时不再有别的借用
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { hub, next: None }));
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<Hub> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.hub
        })
    }

    pub fn total_distance(&self) -> u64 {
        self.iter()
            .map(|hub| u64::from(hub.distance()))
            .sum()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    // 每次调用都从head重新开始，所以可以反复遍历
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(Hub::to_string)
    }

    pub fn lines_rev(&self) -> impl Iterator<Item = String> + '_ {
        let stack: Vec<&Hub> = self.iter().collect();
        stack.into_iter().rev().map(Hub::to_string)
    }

    pub fn print_chain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn print_chain_reverse<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines_rev() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    // 返回的是拷贝，不是链表里节点的引用
    pub fn search(&self, keyword: &str) -> Option<Hub> {
        self.iter()
            .find(|hub| hub.matches(keyword))
            .cloned()
    }

    // 只删第一个匹配的；找不到时链表原样不动
    pub fn remove_first_match(&mut self, keyword: &str) -> Option<Hub> {
        let index = match self.iter().position(|hub| hub.matches(keyword)) {
            Some(index) => index,
            None => {
                warn!("No match found for keyword: {}", keyword);
                return None;
            }
        };

        // 找到前驱的next（或head），把它接到被删节点的next上
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        let node = *link.take()?;
        *link = node.next;
        self.len -= 1;

        debug!("remove_first_match({}): removed {}", keyword, node.hub);
        Some(node.hub)
    }

    // 阈值从0开始，且用严格大于：
    // 小时数全程不增的链表报告没有瓶颈；并列时保留先找到的那一对
    pub fn bottleneck(&self) -> Option<Bottleneck> {
        let mut max_gap = 0;
        let mut found: Option<(&Hub, &Hub)> = None;

        for (current, next) in self.iter().zip(self.iter().skip(1)) {
            let gap = i32::from(next.hour()) - i32::from(current.hour());
            trace!("{} -> {}: {}h", current.name(), next.name(), gap);
            if gap > max_gap {
                max_gap = gap;
                found = Some((current, next));
            }
        }

        found.map(|(from, to)| Bottleneck {
            from: from.name().to_string(),
            to: to.name().to_string(),
            gap: max_gap,
        })
    }

    pub fn display_bottleneck<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Delivery chain is empty.");
        }
        match self.bottleneck() {
            Some(bottleneck) => writeln!(out, "{}", bottleneck),
            None => writeln!(out, "No bottleneck found."),
        }
    }

    // 空链表上调用也没问题
    pub fn teardown(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl Default for DeliveryChain {
    fn default() -> Self {
        Self::new()
    }
}

// 默认的Drop会递归释放Box，链太长会爆栈，所以手动逐个弹出
impl Drop for DeliveryChain {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for DeliveryChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a DeliveryChain {
    type Item = &'a Hub;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Hub;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.hub
        })
    }
}
