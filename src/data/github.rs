//! GitHub Projects (v2) integration over the GraphQL API.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::{Value, json};
use tracing::debug;

use super::{Page, ProjectApi, fetch_all_pages};
use crate::config::Config;
use crate::domain::{FieldValue, ProjectIds, ProjectItem, same_field_name};
use crate::error::AppError;

const USER_AGENT: &str = concat!("estimate-sync/", env!("CARGO_PKG_VERSION"));
const ITEMS_PAGE_SIZE: u32 = 100;

const PROJECT_FIELDS_QUERY: &str = r#"
query($org: String!, $number: Int!) {
  organization(login: $org) {
    projectV2(number: $number) {
      id
      fields(first: 100) {
        nodes { ... on ProjectV2FieldCommon { id name } }
      }
    }
  }
}"#;

const PROJECT_ITEMS_QUERY: &str = r#"
query($project: ID!, $first: Int!, $cursor: String) {
  node(id: $project) {
    ... on ProjectV2 {
      items(first: $first, after: $cursor) {
        pageInfo { hasNextPage endCursor }
        nodes {
          id
          content {
            ... on Issue { title }
            ... on PullRequest { title }
            ... on DraftIssue { title }
          }
          fieldValues(first: 50) {
            nodes {
              ... on ProjectV2ItemFieldSingleSelectValue {
                name
                field { ... on ProjectV2FieldCommon { name } }
              }
              ... on ProjectV2ItemFieldNumberValue {
                number
                field { ... on ProjectV2FieldCommon { name } }
              }
            }
          }
        }
      }
    }
  }
}"#;

const SET_NUMBER_MUTATION: &str = r#"
mutation($project: ID!, $item: ID!, $field: ID!, $value: Float!) {
  updateProjectV2ItemFieldValue(
    input: { projectId: $project, itemId: $item, fieldId: $field, value: { number: $value } }
  ) {
    projectV2Item { id }
  }
}"#;

pub struct GithubClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            token: config.token.clone(),
        })
    }

    fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, AppError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .map_err(|e| AppError::remote(format!("GitHub request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::remote(format!(
                "GitHub request failed with status {}.",
                resp.status()
            )));
        }

        let body: GraphQlResponse<T> = resp
            .json()
            .map_err(|e| AppError::remote(format!("Failed to parse GitHub response: {e}")))?;
        body.into_result()
    }

    fn fetch_items_page(
        &self,
        project_id: &str,
        cursor: Option<&str>,
    ) -> Result<Page<ProjectItem>, AppError> {
        debug!(project_id, cursor, "fetching items page");
        let data: ItemsData = self.graphql(
            PROJECT_ITEMS_QUERY,
            json!({ "project": project_id, "first": ITEMS_PAGE_SIZE, "cursor": cursor }),
        )?;
        items_page(data, project_id)
    }
}

impl ProjectApi for GithubClient {
    fn resolve_ids(
        &self,
        org: &str,
        project_number: u32,
        field_name: &str,
    ) -> Result<ProjectIds, AppError> {
        let data: OrganizationData = self.graphql(
            PROJECT_FIELDS_QUERY,
            json!({ "org": org, "number": project_number }),
        )?;
        pick_ids(data, org, project_number, field_name)
    }

    fn list_items(&self, project_id: &str) -> Result<Vec<ProjectItem>, AppError> {
        fetch_all_pages(|cursor| self.fetch_items_page(project_id, cursor))
    }

    fn set_number_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value: f64,
    ) -> Result<(), AppError> {
        let _: IgnoredAny = self.graphql(
            SET_NUMBER_MUTATION,
            json!({ "project": project_id, "item": item_id, "field": field_id, "value": value }),
        )?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> GraphQlResponse<T> {
    fn into_result(self) -> Result<T, AppError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(AppError::remote(format!(
                "GitHub GraphQL error: {}",
                messages.join("; ")
            )));
        }
        self.data
            .ok_or_else(|| AppError::remote("GitHub response carried no data."))
    }
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<Option<T>>,
}

#[derive(Debug, Deserialize)]
struct OrganizationData {
    organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
struct Organization {
    #[serde(rename = "projectV2")]
    project_v2: Option<ProjectFields>,
}

#[derive(Debug, Deserialize)]
struct ProjectFields {
    id: String,
    fields: Connection<FieldDef>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
    id: Option<String>,
    name: Option<String>,
}

fn pick_ids(
    data: OrganizationData,
    org: &str,
    project_number: u32,
    field_name: &str,
) -> Result<ProjectIds, AppError> {
    let project = data
        .organization
        .ok_or_else(|| AppError::remote(format!("Organization '{org}' not found.")))?
        .project_v2
        .ok_or_else(|| {
            AppError::remote(format!("Project #{project_number} not found in '{org}'."))
        })?;

    let field_id = project
        .fields
        .nodes
        .into_iter()
        .flatten()
        .find(|f| {
            f.name
                .as_deref()
                .is_some_and(|n| same_field_name(n, field_name))
        })
        .and_then(|f| f.id)
        .ok_or_else(|| {
            AppError::remote(format!(
                "Field '{field_name}' not found on project #{project_number}."
            ))
        })?;

    Ok(ProjectIds {
        project_id: project.id,
        field_id,
    })
}

#[derive(Debug, Deserialize)]
struct ItemsData {
    node: Option<ProjectItemsNode>,
}

#[derive(Debug, Deserialize)]
struct ProjectItemsNode {
    items: Option<ItemConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemConnection {
    page_info: PageInfo,
    #[serde(default = "Vec::new")]
    nodes: Vec<Option<ItemNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemNode {
    id: String,
    content: Option<ItemContent>,
    field_values: Connection<FieldValueNode>,
}

#[derive(Debug, Deserialize)]
struct ItemContent {
    title: Option<String>,
}

/// Union of the value types we query; other value types arrive as `{}`.
#[derive(Debug, Deserialize)]
struct FieldValueNode {
    name: Option<String>,
    number: Option<f64>,
    field: Option<FieldRef>,
}

#[derive(Debug, Deserialize)]
struct FieldRef {
    name: Option<String>,
}

fn items_page(data: ItemsData, project_id: &str) -> Result<Page<ProjectItem>, AppError> {
    let conn = data
        .node
        .and_then(|n| n.items)
        .ok_or_else(|| AppError::remote(format!("Project '{project_id}' not found.")))?;

    let items = conn.nodes.into_iter().flatten().map(to_project_item).collect();
    Ok(Page {
        items,
        has_next_page: conn.page_info.has_next_page,
        end_cursor: conn.page_info.end_cursor,
    })
}

fn to_project_item(node: ItemNode) -> ProjectItem {
    let title = node.content.and_then(|c| c.title);
    let fields = node
        .field_values
        .nodes
        .into_iter()
        .flatten()
        .filter_map(|v| {
            let field_name = v.field.and_then(|f| f.name)?;
            let value = match (v.name, v.number) {
                (Some(label), _) => FieldValue::Label(label),
                (None, Some(n)) => FieldValue::Number(n),
                (None, None) => return None,
            };
            Some((field_name, value))
        })
        .collect();

    ProjectItem {
        id: node.id,
        title,
        fields,
    }
}
