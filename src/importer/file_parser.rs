// ==========================================
// 库存阈值计算器 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 通用行映射，日期单元格识别为日期
// ==========================================

use crate::domain::{CellValue, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::SheetParser;
use crate::importer::upload::FileFormat;
use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use std::io::Cursor;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl SheetParser for CsvParser {
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致，超宽部分另行判定
            .from_reader(bytes);

        // 读取表头（去除 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // 行号按物理行计算（表头为第 0 行），空行同样计数
            let row_number = record
                .position()
                .map(|pos| (pos.line() as usize).saturating_sub(1))
                .unwrap_or(row_idx + 1);
            let mut row = RawRow::new(row_number);

            for (col_idx, value) in record.iter().enumerate() {
                let Some(cell) = infer_cell(value) else {
                    continue;
                };
                match headers.get(col_idx).filter(|h| !h.is_empty()) {
                    Some(header) => row.insert(header.clone(), cell),
                    None => row.stray_cells += 1,
                }
            }

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl SheetParser for ExcelParser {
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        // 自动识别 xlsx / xls 容器
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        // 读取第一个 sheet
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))??;

        // 提取表头（第一行）；空表视为无数据
        let mut sheet_rows = range.rows();
        let Some(header_row) = sheet_rows.next() else {
            return Ok(Vec::new());
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, data_row) in sheet_rows.enumerate() {
            let mut row = RawRow::new(row_idx + 1);

            for (col_idx, cell) in data_row.iter().enumerate() {
                let Some(value) = convert_cell(cell) else {
                    continue;
                };
                match headers.get(col_idx).filter(|h| !h.is_empty()) {
                    Some(header) => row.insert(header.clone(), value),
                    None => row.stray_cells += 1,
                }
            }

            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// 通用解析器（根据格式自动选择）
// ==========================================
pub struct UniversalSheetParser;

impl UniversalSheetParser {
    pub fn parse(&self, format: FileFormat, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        match format {
            FileFormat::Csv => CsvParser.parse_rows(bytes),
            FileFormat::Xlsx | FileFormat::Xls => ExcelParser.parse_rows(bytes),
        }
    }
}

// ==========================================
// 单元格类型推断
// ==========================================

/// CSV 文本单元格推断：数字 → 布尔 → 日期 → 文本；空白返回 None
pub fn infer_cell(raw: &str) -> Option<CellValue> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(n) = value.parse::<f64>().ok().filter(|n| n.is_finite()) {
        return Some(CellValue::Number(n));
    }

    if value.eq_ignore_ascii_case("true") {
        return Some(CellValue::Bool(true));
    }
    if value.eq_ignore_ascii_case("false") {
        return Some(CellValue::Bool(false));
    }

    if let Some(date) = parse_date_text(value) {
        return Some(CellValue::Date(date));
    }

    Some(CellValue::Text(value.to_string()))
}

/// 解析日期文本（仅取日历日期部分）
pub fn parse_date_text(value: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Excel 单元格转换
fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(CellValue::Text(s.to_string()))
            }
        }
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(
            cell.as_date()
                .map(CellValue::Date)
                .unwrap_or_else(|| CellValue::Text(cell.to_string())),
        ),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}
