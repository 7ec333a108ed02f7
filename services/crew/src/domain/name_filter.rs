// 人名フィルター
//
// クエリパラメータ`name`による大文字小文字を区別しない部分一致フィルター。

/// 大文字小文字を区別しない部分一致で人名を絞り込むフィルター
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    /// 小文字化済みの検索文字列
    needle: String,
}

impl NameFilter {
    /// フィルターを作成
    ///
    /// 空文字列の場合はフィルターなしとして`None`を返す。
    pub fn new(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        Some(Self {
            needle: value.to_lowercase(),
        })
    }

    /// 人名がフィルターにマッチするか判定
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    /// マッチする人名のみを残す（順序は保持）
    pub fn apply(&self, names: Vec<String>) -> Vec<String> {
        names.into_iter().filter(|name| self.matches(name)).collect()
    }
}
