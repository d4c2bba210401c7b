//! 三个固定的 GraphQL 查询

pub const QUESTION_DATA: &str = "questionData";
pub const QUESTION_SOLUTION_ARTICLES: &str = "questionSolutionArticles";
pub const SOLUTION_DETAIL_ARTICLE: &str = "solutionDetailArticle";

/// 题目详情。`similarQuestions` 与 `stats` 在响应里是 JSON 字符串
pub const QUESTION_DATA_QUERY: &str = r#"query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    boundTopicId
    title
    titleSlug
    content
    translatedTitle
    translatedContent
    isPaidOnly
    difficulty
    likes
    dislikes
    isLiked
    similarQuestions
    contributors {
      username
      profileUrl
      avatarUrl
      __typename
    }
    langToValidPlayground
    topicTags {
      name
      slug
      translatedName
      __typename
    }
    companyTagStats
    codeSnippets {
      lang
      langSlug
      code
      __typename
    }
    stats
    hints
    solution {
      id
      canSeeDetail
      __typename
    }
    status
    sampleTestCase
    metaData
    judgerAvailable
    judgeType
    mysqlSchemas
    enableRunCode
    envInfo
    book {
      id
      bookName
      pressName
      source
      shortDescription
      fullDescription
      bookImgUrl
      pressImgUrl
      productUrl
      __typename
    }
    isSubscribed
    isDailyQuestion
    dailyRecordStatus
    editorType
    ugcQuestionId
    style
    __typename
  }
}"#;

const SOLUTION_ARTICLE_FRAGMENT: &str = r#"fragment solutionArticle on SolutionArticleNode {
  uuid
  title
  slug
  sunk
  chargeType
  status
  identifier
  canEdit
  reactionType
  reactionsV2 {
    count
    reactionType
    __typename
  }
  tags {
    name
    nameTranslated
    slug
    __typename
  }
  createdAt
  thumbnail
  author {
    username
    profile {
      userAvatar
      userSlug
      realName
      __typename
    }
    __typename
  }
  summary
  topic {
    id
    commentCount
    viewCount
    __typename
  }
  byLeetcode
  isMyFavorite
  isMostPopular
  isEditorsPick
  hitCount
  videosInfo {
    videoId
    coverUrl
    duration
    __typename
  }
  __typename
}"#;

const QUESTION_SOLUTION_ARTICLES_BODY: &str = r#"query questionSolutionArticles($questionSlug: String!, $skip: Int, $first: Int, $orderBy: SolutionArticleOrderBy, $userInput: String, $tagSlugs: [String!]) {
  questionSolutionArticles(questionSlug: $questionSlug, skip: $skip, first: $first, orderBy: $orderBy, userInput: $userInput, tagSlugs: $tagSlugs) {
    totalNum
    edges {
      node {
        ...solutionArticle
        __typename
      }
      __typename
    }
    __typename
  }
}"#;

const SOLUTION_DETAIL_ARTICLE_BODY: &str = r#"query solutionDetailArticle($slug: String!, $orderBy: SolutionArticleOrderBy!) {
  solutionArticle(slug: $slug, orderBy: $orderBy) {
    ...solutionArticle
    content
    question {
      questionTitleSlug
      __typename
    }
    position
    next {
      slug
      title
      __typename
    }
    prev {
      slug
      title
      __typename
    }
    __typename
  }
}"#;

/// 题解列表（只取接口默认的第一页）
pub fn question_solution_articles_query() -> String {
    format!(
        "{}\n\n{}",
        QUESTION_SOLUTION_ARTICLES_BODY, SOLUTION_ARTICLE_FRAGMENT
    )
}

/// 单篇题解详情
pub fn solution_detail_article_query() -> String {
    format!(
        "{}\n\n{}",
        SOLUTION_DETAIL_ARTICLE_BODY, SOLUTION_ARTICLE_FRAGMENT
    )
}
