use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Character, Location, NoteRecord, Script};

/// 存储错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("记录不存在: {0}")]
    NotFound(Uuid),

    #[error("记录已存在: {0}")]
    Conflict(Uuid),
}

/// 存储结果
pub type StoreResult<T> = Result<T, StoreError>;

/// 可持久化的记录
///
/// 持久层按id索引，核心不校验记录之间的弱引用（角色被删除后
/// 行上残留的character_id由协作方容忍或清理）
pub trait Record: Clone {
    fn id(&self) -> Uuid;
    /// 写回时刷新updated_at
    fn touch(&mut self);
}

impl Record for Script {
    fn id(&self) -> Uuid {
        self.id
    }
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Character {
    fn id(&self) -> Uuid {
        self.id
    }
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Location {
    fn id(&self) -> Uuid {
        self.id
    }
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for NoteRecord {
    fn id(&self) -> Uuid {
        self.id
    }
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// 按id键控的记录表
#[derive(Debug, Clone)]
pub struct MemoryTable<T: Record> {
    records: HashMap<Uuid, T>,
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn new() -> Self {
        MemoryTable {
            records: HashMap::new(),
        }
    }

    pub fn create(&mut self, record: T) -> StoreResult<Uuid> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        self.records.insert(id, record);
        Ok(id)
    }

    pub fn get(&self, id: Uuid) -> StoreResult<&T> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn update(&mut self, mut record: T) -> StoreResult<()> {
        let id = record.id();
        if !self.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        record.touch();
        self.records.insert(id, record);
        Ok(())
    }

    pub fn delete(&mut self, id: Uuid) -> StoreResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn list(&self) -> Vec<&T> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 内存存储
///
/// 持久层协作方的参考实现，每类实体一张表
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub scripts: MemoryTable<Script>,
    pub characters: MemoryTable<Character>,
    pub locations: MemoryTable<Location>,
    pub notes: MemoryTable<NoteRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
