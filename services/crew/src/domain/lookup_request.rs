// クルー検索リクエスト
//
// パスパラメータ（movieId, role）とクエリパラメータ（name）から
// 検証済みのリクエストを構築する。

use thiserror::Error;

use super::NameFilter;

/// リクエスト検証エラー
///
/// いずれもクライアント起因のエラーで、400レスポンスに対応する。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupRequestError {
    /// movieIdが指定されていない
    #[error("movieId is missing")]
    MissingMovieId,

    /// movieIdが0以外の整数として解釈できない
    #[error("movieId is not a valid non-zero integer: {0}")]
    InvalidMovieId(String),

    /// roleが指定されていない、または空文字列
    #[error("role is missing")]
    MissingRole,
}

/// 検証済みのクルー検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// 映画ID（0以外）
    pub movie_id: i64,
    /// 役職（空でない）
    pub role: String,
    /// 人名フィルター（未指定または空文字列の場合はNone）
    pub name_filter: Option<NameFilter>,
}

impl LookupRequest {
    /// 生のパラメータからリクエストを構築
    ///
    /// # Arguments
    /// * `movie_id` - パスパラメータ`movieId`
    /// * `role` - パスパラメータ`role`
    /// * `name` - クエリパラメータ`name`
    ///
    /// # Returns
    /// * 成功時は`Ok(LookupRequest)`
    /// * movieIdまたはroleが不正な場合は`Err(LookupRequestError)`
    pub fn parse(
        movie_id: Option<&str>,
        role: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, LookupRequestError> {
        let raw_movie_id = movie_id
            .filter(|s| !s.is_empty())
            .ok_or(LookupRequestError::MissingMovieId)?;

        let movie_id = parse_leading_integer(raw_movie_id)
            .filter(|id| *id != 0)
            .ok_or_else(|| LookupRequestError::InvalidMovieId(raw_movie_id.to_string()))?;

        let role = role
            .filter(|s| !s.is_empty())
            .ok_or(LookupRequestError::MissingRole)?
            .to_string();

        let name_filter = name.and_then(NameFilter::new);

        Ok(Self {
            movie_id,
            role,
            name_filter,
        })
    }
}

/// 文字列先頭の整数部分を解釈する
///
/// 先頭の空白をスキップし、任意の符号と連続するASCII数字を読み取る。
/// 符号の直後が`0x`/`0X`の場合は16進数として読み取る（例: `"0x10"` → 16）。
/// 数字以降の文字は無視する（例: `"42abc"` → 42）。
/// 数字が1つもない場合、またはi64に収まらない場合は`None`を返す。
pub fn parse_leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digit_len = digits
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digit_len == 0 {
        return None;
    }

    i64::from_str_radix(&format!("{}{}", sign, &digits[..digit_len]), radix).ok()
}
