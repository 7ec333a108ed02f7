// クルー検索ハンドラー
//
// HTTPリクエストからパラメータを取り出し、クルーリポジトリを1回だけ検索して、
// すべての結果（エラーを含む）をJSONレスポンスに変換する。

use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{flatten_crew_names, LookupRequest, LookupRequestError, LookupResponse};
use crate::infrastructure::CrewRepository;

/// パスパラメータ: 映画ID
pub const MOVIE_ID_PARAM: &str = "movieId";
/// パスパラメータ: 役職
pub const ROLE_PARAM: &str = "role";
/// クエリパラメータ: 人名フィルター
pub const NAME_PARAM: &str = "name";

/// クルー検索のエラー型
///
/// いずれもハンドラー境界で構造化されたJSONレスポンスに変換される。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CrewLookupError {
    /// movieIdまたはroleが欠落・不正（400）
    #[error("Missing movieId or role")]
    InvalidRequest(#[from] LookupRequestError),

    /// 該当レコードなし（404）
    #[error("None found in role and movie")]
    NotFound,

    /// ストアまたは処理中の予期しないエラー（500）
    #[error("{0}")]
    Internal(String),
}

impl CrewLookupError {
    /// 対応するHTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            CrewLookupError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CrewLookupError::NotFound => StatusCode::NOT_FOUND,
            CrewLookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// レスポンスボディ
    ///
    /// クライアントエラーは`Message`、内部エラーは`error`キーで返す。
    pub fn body(&self) -> Value {
        match self {
            CrewLookupError::InvalidRequest(_) | CrewLookupError::NotFound => {
                json!({ "Message": self.to_string() })
            }
            CrewLookupError::Internal(detail) => json!({ "error": detail }),
        }
    }

    /// エラーをHTTPレスポンスに変換
    pub fn into_response(self) -> Response<Body> {
        json_response(self.status_code(), &self.body())
    }
}

/// クルー検索リクエストを処理するハンドラー
///
/// リポジトリはプロセス単位で生成されたものを注入し、
/// リクエストごとには作成しない。
pub struct CrewLookupHandler<R>
where
    R: CrewRepository,
{
    /// クルーリポジトリ
    crew_repo: R,
}

impl<R> CrewLookupHandler<R>
where
    R: CrewRepository,
{
    /// 新しいCrewLookupHandlerを作成
    pub fn new(crew_repo: R) -> Self {
        Self { crew_repo }
    }

    /// クルーを検索
    ///
    /// # 処理フロー
    /// 1. (movie_id, role) でリポジトリを1回だけ検索
    /// 2. 0件の場合は`NotFound`
    /// 3. 全レコードの`names`を分割・トリム・平坦化
    /// 4. 人名フィルターがあれば部分一致で絞り込み（0件でも成功扱い）
    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, CrewLookupError> {
        let records = self
            .crew_repo
            .find_by_movie_and_role(request.movie_id, &request.role)
            .await
            .map_err(|e| CrewLookupError::Internal(e.to_string()))?;

        if records.is_empty() {
            return Err(CrewLookupError::NotFound);
        }

        let raw_crew = flatten_crew_names(&records);
        let crew = match &request.name_filter {
            Some(filter) => filter.apply(raw_crew),
            None => raw_crew,
        };

        Ok(LookupResponse {
            movie_id: request.movie_id,
            role: request.role.clone(),
            crew,
        })
    }

    /// 生のパラメータからレスポンスを生成
    ///
    /// 失敗はすべてステータスコード付きのJSONレスポンスに変換され、
    /// 呼び出し元にエラーとして伝播しない。
    pub async fn handle_params(
        &self,
        movie_id: Option<&str>,
        role: Option<&str>,
        name: Option<&str>,
    ) -> Response<Body> {
        let result = self
            .try_handle(movie_id, role, name)
            .await
            .and_then(|response| {
                let crew_count = response.crew.len();
                serde_json::to_value(&response)
                    .map(|body| (body, crew_count))
                    .map_err(|e| CrewLookupError::Internal(e.to_string()))
            });

        match result {
            Ok((body, crew_count)) => {
                info!(
                    movie_id = movie_id,
                    role = role,
                    crew_count = crew_count,
                    "クルー検索成功"
                );
                json_response(StatusCode::OK, &body)
            }
            Err(err) => {
                match &err {
                    CrewLookupError::InvalidRequest(reason) => {
                        warn!(reason = %reason, "不正なリクエスト");
                    }
                    CrewLookupError::NotFound => {
                        info!(movie_id = movie_id, role = role, "該当するクルーなし");
                    }
                    CrewLookupError::Internal(detail) => {
                        error!(error = %detail, "クルー検索に失敗");
                    }
                }
                err.into_response()
            }
        }
    }

    /// HTTPリクエストを処理
    ///
    /// パスパラメータ`movieId`・`role`とクエリパラメータ`name`を取り出して
    /// `handle_params`に委譲する。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let path_params = request.path_parameters_ref();
        let query_params = request.query_string_parameters_ref();

        let movie_id = path_params.and_then(|p| p.first(MOVIE_ID_PARAM));
        let role = path_params.and_then(|p| p.first(ROLE_PARAM));
        let name = query_params.and_then(|q| q.first(NAME_PARAM));

        info!(
            movie_id = movie_id,
            role = role,
            name = name,
            "クルー検索リクエスト受信"
        );

        self.handle_params(movie_id, role, name).await
    }

    async fn try_handle(
        &self,
        movie_id: Option<&str>,
        role: Option<&str>,
        name: Option<&str>,
    ) -> Result<LookupResponse, CrewLookupError> {
        let request = LookupRequest::parse(movie_id, role, name)?;
        self.lookup(&request).await
    }
}

/// JSONボディと`content-type: application/json`を持つレスポンスを構築
pub fn json_response(status: StatusCode, body: &Value) -> Response<Body> {
    let mut response = Response::new(Body::Text(body.to_string()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
