/// クルーテーブル接続設定
///
/// 環境変数からテーブル名とリージョンを読み込み、
/// DynamoDBクライアントとともに保持する。
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// テーブル名の環境変数
pub const CREW_TABLE_NAME_ENV: &str = "CREW_TABLE_NAME";

/// リージョン上書き用の環境変数
pub const REGION_ENV: &str = "REGION";

/// クルーテーブル設定のエラー型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrewTableConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つクルーテーブル設定
#[derive(Debug, Clone)]
pub struct CrewTableConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// クルーテーブル名
    table_name: String,
}

impl CrewTableConfig {
    /// 環境からAWS設定を読み込み、新しいCrewTableConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - CREW_TABLE_NAME: クルー用DynamoDBテーブル名（必須）
    /// - REGION: 指定された場合はaws-configが解決したリージョンを上書き
    pub async fn from_env() -> Result<Self, CrewTableConfigError> {
        // クライアント作成前にテーブル名を検証
        let table_name = table_name_from_env()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region_from_env() {
            loader = loader.region(Region::new(region));
        }
        let aws_config = loader.load().await;

        let client = DynamoDbClient::new(&aws_config);

        Ok(Self { client, table_name })
    }

    /// 明示的な値で新しいCrewTableConfigを作成（テスト用）
    #[cfg(test)]
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// クルーテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// 環境変数からテーブル名を読み込み（空文字は未設定扱い）
pub fn table_name_from_env() -> Result<String, CrewTableConfigError> {
    std::env::var(CREW_TABLE_NAME_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| CrewTableConfigError::MissingEnvVar(CREW_TABLE_NAME_ENV.to_string()))
}

/// 環境変数からリージョンを読み込み（空文字はNone扱い）
pub fn region_from_env() -> Option<String> {
    std::env::var(REGION_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    fn offline_client() -> DynamoDbClient {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("ap-northeast-1"))
            .build();
        DynamoDbClient::from_conf(config)
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let error = CrewTableConfigError::MissingEnvVar("TEST_VAR".to_string());
        assert_eq!(error.to_string(), "Missing environment variable: TEST_VAR");
    }

    #[test]
    fn test_crew_table_config_new() {
        let config = CrewTableConfig::new(offline_client(), "crew-table".to_string());
        assert_eq!(config.table_name(), "crew-table");
    }

    #[test]
    #[serial(crew_env)]
    fn test_table_name_from_env() {
        unsafe { set_env(CREW_TABLE_NAME_ENV, "MovieCrew") };
        assert_eq!(table_name_from_env(), Ok("MovieCrew".to_string()));
        unsafe { remove_env(CREW_TABLE_NAME_ENV) };
    }

    #[test]
    #[serial(crew_env)]
    fn test_table_name_from_env_missing() {
        unsafe { remove_env(CREW_TABLE_NAME_ENV) };
        assert_eq!(
            table_name_from_env(),
            Err(CrewTableConfigError::MissingEnvVar(
                CREW_TABLE_NAME_ENV.to_string()
            ))
        );
    }

    #[test]
    #[serial(crew_env)]
    fn test_table_name_from_env_blank_is_missing() {
        unsafe { set_env(CREW_TABLE_NAME_ENV, "   ") };
        assert!(table_name_from_env().is_err());
        unsafe { remove_env(CREW_TABLE_NAME_ENV) };
    }

    #[test]
    #[serial(crew_env)]
    fn test_region_from_env() {
        unsafe { set_env(REGION_ENV, " eu-west-1 ") };
        assert_eq!(region_from_env(), Some("eu-west-1".to_string()));

        unsafe { set_env(REGION_ENV, "") };
        assert_eq!(region_from_env(), None);

        unsafe { remove_env(REGION_ENV) };
        assert_eq!(region_from_env(), None);
    }

    #[tokio::test]
    #[serial(crew_env)]
    async fn test_from_env_fails_without_table_name() {
        unsafe { remove_env(CREW_TABLE_NAME_ENV) };

        let result = CrewTableConfig::from_env().await;
        assert!(matches!(
            result,
            Err(CrewTableConfigError::MissingEnvVar(ref name)) if name == CREW_TABLE_NAME_ENV
        ));
    }

    #[tokio::test]
    #[serial(crew_env)]
    async fn test_from_env_reads_table_name_and_region() {
        unsafe {
            set_env(CREW_TABLE_NAME_ENV, "MovieCrew");
            set_env(REGION_ENV, "eu-west-1");
        }

        let config = CrewTableConfig::from_env().await.unwrap();
        assert_eq!(config.table_name(), "MovieCrew");
        assert_eq!(
            config.client().config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );

        unsafe {
            remove_env(CREW_TABLE_NAME_ENV);
            remove_env(REGION_ENV);
        }
    }
}
