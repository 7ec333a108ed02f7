// クルーレコード
//
// クルーテーブルの1行を表すドメインモデル。
// `names`属性はカンマ区切りの文字列として保存されている。

/// クルーテーブルの1レコード
///
/// (movie_id, crew_role) の複合キーで識別され、
/// 複数の人名をカンマ区切りで連結した`names`を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewRecord {
    /// 映画ID（パーティションキー）
    pub movie_id: i64,
    /// 役職（ソートキー）
    pub crew_role: String,
    /// カンマ区切りの人名リスト（各要素の前後に空白を含み得る）
    pub names: String,
}

impl CrewRecord {
    /// 新しいCrewRecordを作成
    pub fn new(movie_id: i64, crew_role: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            movie_id,
            crew_role: crew_role.into(),
            names: names.into(),
        }
    }

    /// `names`を個々の人名に分割
    ///
    /// 区切り文字はカンマのみで、エスケープは扱わない。
    /// 各要素は前後の空白のみトリムされ、空要素も除外せずに返す。
    pub fn crew_names(&self) -> impl Iterator<Item = String> + '_ {
        self.names.split(',').map(|name| name.trim().to_string())
    }
}

/// 複数レコードの人名を1つのリストに平坦化
///
/// レコードの順序、およびレコード内での出現順を保持する。
pub fn flatten_crew_names(records: &[CrewRecord]) -> Vec<String> {
    records.iter().flat_map(|record| record.crew_names()).collect()
}
