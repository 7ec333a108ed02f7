/// クルー検索HTTP Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエスト（パスパラメータ movieId, role、
/// クエリパラメータ name）を処理し、クルー名リストをJSONで返却する。
use crew::application::{CrewLookupError, CrewLookupHandler};
use crew::infrastructure::{init_logging, CrewTableConfig, CrewTableConfigError, DynamoCrewRepository};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// CrewLookupHandlerの静的インスタンス
///
/// Lambda warm start時にDynamoDBクライアントを再利用するため、
/// 一度初期化したハンドラーを静的に保持する。
static CREW_LOOKUP_HANDLER: OnceCell<CrewLookupHandler<DynamoCrewRepository>> =
    OnceCell::const_new();

/// CrewLookupHandlerを取得（初期化されていなければ初期化）
async fn get_crew_lookup_handler()
-> Result<&'static CrewLookupHandler<DynamoCrewRepository>, CrewTableConfigError> {
    CREW_LOOKUP_HANDLER
        .get_or_try_init(|| async {
            let config = CrewTableConfig::from_env().await?;
            info!(table_name = config.table_name(), "クルーテーブル設定を読み込み");

            let repo = DynamoCrewRepository::new(
                config.client().clone(),
                config.table_name().to_string(),
            );
            Ok(CrewLookupHandler::new(repo))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("クルー検索Lambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 設定エラーを含むすべての失敗をJSONレスポンスに変換し、
/// ランタイムにはエラーを返さない。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let crew_lookup_handler = match get_crew_lookup_handler().await {
        Ok(handler) => handler,
        Err(err) => {
            error!(error = %err, "クルーテーブル設定の読み込みに失敗");
            return Ok(CrewLookupError::Internal(err.to_string()).into_response());
        }
    };

    Ok(crew_lookup_handler.handle(&request).await)
}
