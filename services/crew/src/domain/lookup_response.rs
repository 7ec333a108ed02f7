// クルー検索レスポンス
//
// 200レスポンスのボディとしてシリアライズされる。

use serde::Serialize;

/// クルー検索結果
///
/// リクエストのmovieIdとroleをそのまま返し、
/// `crew`には個々の人名（レコードではない）を格納する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// 映画ID
    pub movie_id: i64,
    /// 役職
    pub role: String,
    /// クルー名リスト
    pub crew: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let response = LookupResponse {
            movie_id: 1234,
            role: "Director".to_string(),
            crew: vec!["Jane Doe".to_string()],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "movieId": 1234,
                "role": "Director",
                "crew": ["Jane Doe"]
            })
        );
    }

    #[test]
    fn test_serialize_empty_crew() {
        let response = LookupResponse {
            movie_id: 1,
            role: "Writer".to_string(),
            crew: vec![],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["crew"], json!([]));
    }
}
