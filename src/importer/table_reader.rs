// ==========================================
// 餐饮库存决策支持系统 - CSV 表读取器
// ==========================================
// 职责: CSV → 表头 + 行映射,提供大小写不敏感的列解析
// 注: 表头去空白;全空白行跳过;行长不一致容忍
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// CsvTable - 已读取的表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl CsvTable {
    /// 去空白后的表头
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 数据行 (表头 → 去空白单元格值)
    pub fn rows(&self) -> &[HashMap<String, String>] {
        &self.rows
    }

    /// 大小写不敏感的精确列名解析
    pub fn column_exact(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|h| h.to_lowercase() == lower)
            .map(String::as_str)
    }

    /// 包含匹配的列名解析: 表头 (小写) 同时包含所有关键词
    pub fn column_containing(&self, needles: &[&str]) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| {
                let lower = h.to_lowercase();
                needles.iter().all(|n| lower.contains(n))
            })
            .map(String::as_str)
    }

    /// 取某行某列的非空值
    pub fn cell<'a>(&self, row: &'a HashMap<String, String>, column: &str) -> Option<&'a str> {
        row.get(column).map(String::as_str).filter(|v| !v.is_empty())
    }
}

// ==========================================
// CsvTableReader - CSV 读取器
// ==========================================
pub struct CsvTableReader;

impl CsvTableReader {
    /// 读取 CSV 文件为表结构
    pub fn read(path: &Path) -> ImportResult<CsvTable> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(CsvTable { headers, rows })
    }
}
