// ==========================================
// 库存阈值计算器 - 原始行
// ==========================================
// 用途: 解析器输出 → 行校验器输入
// 生命周期: 仅在一次计算流程内
// ==========================================

use crate::domain::types::CellValue;
use std::collections::HashMap;

/// 解析后的通用行（列名 → 单元格值）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 数据行号（表头之后从 1 开始，用于诊断）
    pub row_number: usize,
    /// 非空单元格
    pub cells: HashMap<String, CellValue>,
    /// 无列名的非空单元格数量（>0 视为畸形行）
    pub stray_cells: usize,
}

impl RawRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            ..Default::default()
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty() && self.stray_cells == 0
    }
}
