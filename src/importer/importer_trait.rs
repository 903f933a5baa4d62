// ==========================================
// 库存阈值计算器 - 导入 Trait
// ==========================================
// 职责: 定义解析接口（不包含实现）
// ==========================================

use crate::domain::RawRow;
use crate::importer::error::ImportResult;

// ==========================================
// SheetParser Trait
// ==========================================
// 用途: 将上传内容解析为通用行（首个工作表，首行为表头）
// 实现者: CsvParser, ExcelParser
pub trait SheetParser: Send + Sync {
    /// 解析字节内容为原始行
    ///
    /// # 参数
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 非空行列表（完全空白的行被跳过）
    /// - Err: 容器损坏、编码错误等
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>>;
}
