use crate::client::LeetCodeClient;
use crate::error::Result;
use crate::problem::{Problem, Solution, SolutionEdge, StatStatusPair};
use crate::query;
use crate::storage::Storage;
use crate::transform::{decode_embedded_json, hoist_field, take_path};
use log::{debug, info, trace};
use serde_json::{json, Value};

/// 抓取流程：题目列表 → 题目详情 → 题解列表 → 题解详情 → 写结果
///
/// 全程顺序执行，遇到第一个错误即返回，已写出的文件保留在磁盘上。
#[derive(Debug, Clone)]
pub struct Crawler {
    client: LeetCodeClient,
    storage: Storage,
}

/// 一次完整运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub questions: usize,
    pub solutions: usize,
}

impl Crawler {
    pub fn new(client: LeetCodeClient, storage: Storage) -> Self {
        Self { client, storage }
    }

    pub async fn run(&self) -> Result<CrawlSummary> {
        info!("Starting...");
        info!("题目列表获取中...");
        let question_slugs = self.fetch_question_slugs().await?;
        info!("题目列表获取完成, 共 {} 道题目", question_slugs.len());

        let mut summary = CrawlSummary::default();
        let total = question_slugs.len();
        for (i, question_slug) in question_slugs.iter().enumerate() {
            info!("题目: {}/{}", i + 1, total);
            let problem = self.crawl_question(question_slug, i + 1, total).await?;

            summary.questions += 1;
            summary.solutions += problem.solutions.len();
        }

        info!(
            "Finished. 题目 {} 道, 题解 {} 篇",
            summary.questions, summary.solutions
        );
        Ok(summary)
    }

    /// 抓取单道题目及其全部题解，并写入结果文件
    async fn crawl_question(
        &self,
        question_slug: &str,
        index: usize,
        total: usize,
    ) -> Result<Problem> {
        info!("题目 [{}] 获取中...", question_slug);
        let mut problem = self.fetch_question(question_slug).await?;

        let solution_slugs = self.fetch_solution_slugs(question_slug).await?;
        info!(
            "题目 [{}] 题解数量: {}",
            question_slug,
            solution_slugs.len()
        );

        let mut solutions = Vec::with_capacity(solution_slugs.len());
        for (j, solution_slug) in solution_slugs.iter().enumerate() {
            info!(
                "题解: {}/{}    题目: {}/{}",
                j + 1,
                solution_slugs.len(),
                index,
                total
            );
            debug!("题解 [{}] 获取中...", solution_slug);
            solutions.push(self.fetch_solution(question_slug, solution_slug).await?);
        }
        problem.attach_solutions(solutions);

        let document = serde_json::to_string_pretty(&problem)?;
        self.storage
            .write(&self.storage.result_file(question_slug), &document)
            .await?;
        info!("题目 [{}] 已写入", question_slug);
        Ok(problem)
    }

    /// 获取全部免费题目的 slug，保持接口返回的顺序
    pub async fn fetch_question_slugs(&self) -> Result<Vec<String>> {
        let body = self.client.get_text(&self.client.problems_all_url()).await?;
        self.storage
            .write(&self.storage.questions_snapshot(), &body)
            .await?;

        let pairs = take_path(serde_json::from_str(&body)?, &["stat_status_pairs"])?;
        let pairs: Vec<StatStatusPair> = serde_json::from_value(pairs)?;
        trace!("题目列表记录数: {}", pairs.len());

        Ok(pairs
            .into_iter()
            .filter(|pair| !pair.paid_only)
            .map(|pair| pair.stat.title_slug)
            .collect())
    }

    /// 获取题目详情
    pub async fn fetch_question(&self, slug: &str) -> Result<Problem> {
        let body = self
            .client
            .post_graphql(
                &self.client.problem_url(slug),
                query::QUESTION_DATA,
                query::QUESTION_DATA_QUERY,
                json!({ "titleSlug": slug }),
            )
            .await?;
        self.storage
            .write(&self.storage.question_snapshot(slug), &body)
            .await?;

        let mut question = take_path(serde_json::from_str(&body)?, &["data", "question"])?;
        decode_embedded_json(&mut question, "similarQuestions")?;
        decode_embedded_json(&mut question, "stats")?;

        let problem: Problem = serde_json::from_value(question)?;
        debug!("获取到题目: title={}", problem.title);
        Ok(problem)
    }

    /// 获取题目的题解 slug 列表（接口默认的一页）
    pub async fn fetch_solution_slugs(&self, question_slug: &str) -> Result<Vec<String>> {
        let body = self
            .client
            .post_graphql(
                &self.client.solutions_url(question_slug),
                query::QUESTION_SOLUTION_ARTICLES,
                &query::question_solution_articles_query(),
                json!({ "questionSlug": question_slug, "orderBy": "DEFAULT" }),
            )
            .await?;
        self.storage
            .write(&self.storage.solutions_snapshot(question_slug), &body)
            .await?;

        let edges: Vec<SolutionEdge> = serde_json::from_value(take_path(
            serde_json::from_str(&body)?,
            &["data", "questionSolutionArticles", "edges"],
        )?)?;

        Ok(edges.into_iter().map(|edge| edge.node.slug).collect())
    }

    /// 获取单篇题解，并把所属题目的 slug 提升到顶层
    pub async fn fetch_solution(
        &self,
        question_slug: &str,
        solution_slug: &str,
    ) -> Result<Solution> {
        let body = self
            .client
            .post_graphql(
                &self.client.solution_url(question_slug, solution_slug),
                query::SOLUTION_DETAIL_ARTICLE,
                &query::solution_detail_article_query(),
                json!({ "slug": solution_slug, "orderBy": "DEFAULT" }),
            )
            .await?;
        self.storage
            .write(
                &self.storage.solution_snapshot(question_slug, solution_slug),
                &body,
            )
            .await?;

        let mut article: Value =
            take_path(serde_json::from_str(&body)?, &["data", "solutionArticle"])?;
        hoist_field(&mut article, "question", "questionTitleSlug")?;

        Ok(serde_json::from_value(article)?)
    }
}
