use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

// ---------- 输出结构 ----------
/// 题目，最终按 slug 写入 `result/<slug>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title_slug: String,
    pub title: String,
    /// HTML 格式的题面
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_content: Option<String>,
    #[serde(default)]
    pub is_paid_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// 相似题目，只保存 slug/标题等引用信息
    #[serde(default, deserialize_with = "null_as_default")]
    pub similar_questions: Vec<RelatedProblem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hints: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solutions: Vec<Solution>,
}

impl Problem {
    /// 挂上全部题解，只在所有题解都抓取完之后调用
    pub fn attach_solutions(&mut self, solutions: Vec<Solution>) {
        self.solutions = solutions;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProblem {
    pub title: String,
    pub title_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<String>,
}

/// 题目分类标签
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_name: Option<String>,
}

/// 代码片段（支持多语言）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

/// 通过率统计，原始计数和格式化文本各一份
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_accepted: String,
    pub total_submission: String,
    pub total_accepted_raw: u64,
    pub total_submission_raw: u64,
    pub ac_rate: String,
}

/// 题解文章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub uuid: String,
    pub title: String,
    pub slug: String,
    /// 免费或付费
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<SolutionTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub by_leetcode: bool,
    /// HTML 格式的正文
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// 所属题目的 slug
    pub question_title_slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionTag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_translated: Option<String>,
    pub slug: String,
}

// ---------- 接口响应结构 ----------
/// 题目列表接口中的一条记录
#[derive(Debug, Deserialize)]
pub struct StatStatusPair {
    pub stat: ProblemStat,
    #[serde(default)]
    pub paid_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProblemStat {
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
}

/// 题解列表中的一条边
#[derive(Debug, Deserialize)]
pub struct SolutionEdge {
    pub node: SolutionNode,
}

#[derive(Debug, Deserialize)]
pub struct SolutionNode {
    pub slug: String,
}

/// null 与缺失都当成默认值（通常是空列表）
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
