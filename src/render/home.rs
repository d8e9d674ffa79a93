// src/render/home.rs
// =============================================================================
// The personalized home page.
//
// Every user gets a page of ready-made searches:
// - "My documents": what they created, last updated, or own
// - "Processes": documents tagged for each of their roles with type=process
// - "General documents": everything tagged for each of their roles
//
// The links are relative search URLs that the wiki's search endpoint
// understands, e.g.
//   search?term=&filters[created_by]=me
//   search?term=[role=Editor][type=process]
// =============================================================================

use url::Url;

use super::escape_html;
use crate::permissions::{Actor, Authorizer};

/// Capability that unlocks the "New shelf" action.
pub const CREATE_SHELF_CAPABILITY: &str = "bookshelf-create-all";

/// The per-user filters of the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFilter {
    CreatedBy,
    UpdatedBy,
    OwnedBy,
}

impl DocumentFilter {
    pub const ALL: [DocumentFilter; 3] = [
        DocumentFilter::CreatedBy,
        DocumentFilter::UpdatedBy,
        DocumentFilter::OwnedBy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocumentFilter::CreatedBy => "created_by",
            DocumentFilter::UpdatedBy => "updated_by",
            DocumentFilter::OwnedBy => "owned_by",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocumentFilter::CreatedBy => "All documents I created",
            DocumentFilter::UpdatedBy => "All documents I updated last",
            DocumentFilter::OwnedBy => "All documents I own",
        }
    }
}

pub fn my_documents_query(filter: DocumentFilter) -> String {
    format!("search?term=&filters[{}]=me", filter.key())
}

pub fn role_processes_query(role_name: &str) -> String {
    format!("search?term=[role={}][type=process]", role_name)
}

pub fn role_documents_query(role_name: &str) -> String {
    format!("search?term=[role={}]", role_name)
}

fn link(href: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a><br>\n",
        escape_html(href),
        escape_html(label)
    )
}

/// Renders the home page body for `actor`.
///
/// Parameters:
///   authorizer: answers capability checks for the optional actions
///   base_url: root of the wiki, used for absolute action links
pub fn render_home<A>(actor: &Actor, authorizer: &A, base_url: &Url) -> String
where
    A: Authorizer + ?Sized,
{
    let mut html = String::new();

    html.push_str("<div class=\"mt-m\">\n<main class=\"content-wrap card\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(actor.name())));
    html.push_str(
        "<p>This page is generated for you and links to tag based searches \
         for your documents and your roles.</p>\n",
    );

    html.push_str("<h4>My documents</h4>\n");
    for filter in DocumentFilter::ALL {
        html.push_str(&link(&my_documents_query(filter), filter.label()));
    }

    html.push_str("<h4>Processes</h4>\n");
    for role in &actor.roles {
        html.push_str(&link(
            &role_processes_query(&role.display_name),
            &format!("Relevant processes for my role: {}", role.display_name),
        ));
    }

    html.push_str("<h4>General documents</h4>\n");
    for role in &actor.roles {
        html.push_str(&link(
            &role_documents_query(&role.display_name),
            &format!("All documents for my role: {}", role.display_name),
        ));
    }

    html.push_str("</main>\n");

    if authorizer.can(CREATE_SHELF_CAPABILITY) {
        let create_shelf = format!("{}/create-shelf", base_url.as_str().trim_end_matches('/'));
        html.push_str("<div class=\"actions mb-xl\">\n<h5>Actions</h5>\n");
        html.push_str(&format!(
            "<a href=\"{}\" class=\"icon-list-item\">New Shelf</a>\n",
            escape_html(&create_shelf)
        ));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}
