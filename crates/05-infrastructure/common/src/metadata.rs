//! 类型元数据定义
//!
//! 提供依赖解析时使用的类型标识

use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型键
///
/// 依赖注入中所有映射表的键。既可以表示具体类型，也可以表示 `dyn Trait` 接口类型。
/// 相等性与哈希只由 [`TypeId`] 决定，类型名称仅用于诊断输出。
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型键
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    ///
    /// `dyn a::b::Logger + core::marker::Send` 会得到 `dyn Logger + Send`，泛型参数保持原样。
    pub fn short_name(&self) -> String {
        split_bounds(self.name)
            .into_iter()
            .map(shorten_path)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// 按顶层 ` + ` 拆分 trait 对象的各个约束，泛型参数内部的 `+` 不拆分
fn split_bounds(name: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in name.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => {
                parts.push(name[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(name[start..].trim());
    parts
}

fn shorten_path(path: &str) -> String {
    let (prefix, path) = match path.strip_prefix("dyn ") {
        Some(rest) => ("dyn ", rest),
        None => ("", path),
    };
    let base = path.split('<').next().unwrap_or(path);
    let short = base.rsplit("::").next().unwrap_or(base);
    format!("{}{}{}", prefix, short, &path[base.len()..])
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TypeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
