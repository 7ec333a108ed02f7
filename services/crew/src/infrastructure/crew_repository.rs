/// DynamoDBからクルーレコードを検索するためのクルーリポジトリ
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

use crate::domain::CrewRecord;

/// パーティションキー属性名
const MOVIE_ID_ATTR: &str = "movieId";
/// ソートキー属性名
const CREW_ROLE_ATTR: &str = "crewRole";
/// カンマ区切り人名の属性名
const NAMES_ATTR: &str = "names";

/// クルーリポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CrewRepositoryError {
    /// DynamoDBへのクエリに失敗
    #[error("Query error: {0}")]
    QueryError(String),

    /// 取得したアイテムの形式が不正
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

/// クルー検索用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替え可能にする。
#[async_trait]
pub trait CrewRepository: Send + Sync {
    /// (movie_id, crew_role) に完全一致するレコードを取得
    ///
    /// # 引数
    /// * `movie_id` - 映画ID
    /// * `crew_role` - 役職
    ///
    /// # 戻り値
    /// * 成功時はストアが返した順序の`Ok(Vec<CrewRecord>)`（0件も含む）
    /// * 失敗時は`Err(CrewRepositoryError)`
    async fn find_by_movie_and_role(
        &self,
        movie_id: i64,
        crew_role: &str,
    ) -> Result<Vec<CrewRecord>, CrewRepositoryError>;
}

/// CrewRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoCrewRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// クルーテーブル名
    table_name: String,
}

impl DynamoCrewRepository {
    /// 新しいDynamoCrewRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - クルーテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBアイテムをCrewRecordに変換
    ///
    /// `names`が存在しない、または文字列でない場合はエラー。
    /// キー属性が欠けている場合はクエリ条件の値を使う。
    fn record_from_item(
        item: &HashMap<String, AttributeValue>,
        movie_id: i64,
        crew_role: &str,
    ) -> Result<CrewRecord, CrewRepositoryError> {
        let names = item
            .get(NAMES_ATTR)
            .and_then(|v| v.as_s().ok())
            .ok_or_else(|| {
                CrewRepositoryError::DeserializationError(
                    "Missing names field".to_string(),
                )
            })?
            .clone();

        let movie_id = item
            .get(MOVIE_ID_ATTR)
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse::<i64>().ok())
            .unwrap_or(movie_id);

        let crew_role = item
            .get(CREW_ROLE_ATTR)
            .and_then(|v| v.as_s().ok())
            .cloned()
            .unwrap_or_else(|| crew_role.to_string());

        Ok(CrewRecord {
            movie_id,
            crew_role,
            names,
        })
    }
}

#[async_trait]
impl CrewRepository for DynamoCrewRepository {
    async fn find_by_movie_and_role(
        &self,
        movie_id: i64,
        crew_role: &str,
    ) -> Result<Vec<CrewRecord>, CrewRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("movieId = :movieId AND crewRole = :crewRole")
            .expression_attribute_values(":movieId", AttributeValue::N(movie_id.to_string()))
            .expression_attribute_values(":crewRole", AttributeValue::S(crew_role.to_string()))
            .send()
            .await
            .map_err(|e| CrewRepositoryError::QueryError(e.into_service_error().to_string()))?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(|item| Self::record_from_item(item, movie_id, crew_role))
            .collect()
    }
}
