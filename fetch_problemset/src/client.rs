use crate::config::Config;
use crate::error::{FetchError, Result};
use log::{error, trace};
use reqwest::header::{CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::{Client, Response};
use serde_json::{json, Value};

/// LeetCode 接口客户端，只负责发请求并把响应体原样以文本返回
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    http: Client,
    base_url: String,
}

impl LeetCodeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 全部题目列表接口
    pub fn problems_all_url(&self) -> String {
        format!("{}/api/problems/all/", self.base_url)
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql/", self.base_url)
    }

    /// 题目页面，作为 questionData 的 Referer
    pub fn problem_url(&self, slug: &str) -> String {
        format!("{}/problems/{}/", self.base_url, slug)
    }

    pub fn solutions_url(&self, question_slug: &str) -> String {
        format!("{}/problems/{}/solution/", self.base_url, question_slug)
    }

    pub fn solution_url(&self, question_slug: &str, solution_slug: &str) -> String {
        format!(
            "{}/problems/{}/solution/{}/",
            self.base_url, question_slug, solution_slug
        )
    }

    /// GET 请求，返回响应体文本
    pub async fn get_text(&self, url: &str) -> Result<String> {
        trace!("发送 GET 请求: url={}", url);
        let resp = self.http.get(url).send().await?;
        read_body(url, resp).await
    }

    /// 带 Origin/Referer 的 GraphQL POST 请求，返回响应体文本
    pub async fn post_graphql(
        &self,
        referer: &str,
        operation_name: &str,
        query: &str,
        variables: Value,
    ) -> Result<String> {
        let url = self.graphql_url();
        let request_body = json!({
            "operationName": operation_name,
            "query": query,
            "variables": variables,
        });

        trace!(
            "发送 GraphQL 请求: operation={}, referer={}",
            operation_name,
            referer
        );
        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ORIGIN, &self.base_url)
            .header(REFERER, referer)
            .body(request_body.to_string())
            .send()
            .await?;
        read_body(&url, resp).await
    }
}

async fn read_body(url: &str, resp: Response) -> Result<String> {
    let status = resp.status();
    trace!("收到API响应: status={}", status);
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        error!("API 返回错误: status={}, body={}", status, body);
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(resp.text().await?)
}
