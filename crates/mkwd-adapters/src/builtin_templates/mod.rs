//! Built-in template definitions.
//!
//! [`all_templates`] is the single entry point used to seed the catalog. Each
//! definition is plain data: directory names, file names and the bodies from
//! [`content`]. Declaration order is the order entries are created in.
//!
//! | Type        | Layout                                                     |
//! |-------------|------------------------------------------------------------|
//! | `portfolio` | FastAPI app, static assets, Jinja2 pages, Docker, Alembic  |
//! | `api`       | FastAPI app with routes and database, tests                |
//! | `fullstack` | Same tree as `portfolio`                                   |

pub mod content;

use mkwd_core::domain::{ProjectType, Template, TemplateMetadata, TemplateNode};

use self::content::*;

/// Every built-in template, in `ProjectType::ALL` order.
pub fn all_templates() -> Vec<Template> {
    vec![portfolio(), api(), fullstack()]
}

/// Portfolio site: FastAPI backend with pages, chatbot, email and analytics
/// routes, static assets, Jinja2 templates, Docker and Alembic.
pub fn portfolio() -> Template {
    Template::new(
        ProjectType::Portfolio,
        TemplateMetadata::new("FastAPI Portfolio")
            .description("FastAPI web app with pages, static assets, Docker and Alembic")
            .tags(["python", "fastapi", "portfolio", "docker"]),
    )
    .with_tree(web_app_tree())
}

/// Minimal API service.
pub fn api() -> Template {
    Template::new(
        ProjectType::Api,
        TemplateMetadata::new("FastAPI Service")
            .description("Minimal FastAPI service with database and tests")
            .tags(["python", "fastapi", "api"]),
    )
    .with_tree(vec![
        TemplateNode::dir(
            "app",
            vec![
                TemplateNode::empty("__init__.py"),
                TemplateNode::literal("main.py", MAIN_PY),
                TemplateNode::literal("config.py", CONFIG_PY),
                TemplateNode::dir(
                    "api",
                    vec![
                        TemplateNode::empty("__init__.py"),
                        TemplateNode::dir(
                            "routes",
                            vec![
                                TemplateNode::empty("__init__.py"),
                                TemplateNode::empty("users.py"),
                                TemplateNode::empty("auth.py"),
                            ],
                        ),
                    ],
                ),
                TemplateNode::dir(
                    "database",
                    vec![
                        TemplateNode::empty("__init__.py"),
                        TemplateNode::empty("models.py"),
                        TemplateNode::literal("connection.py", CONNECTION_PY),
                    ],
                ),
            ],
        ),
        TemplateNode::dir(
            "tests",
            vec![
                TemplateNode::empty("__init__.py"),
                TemplateNode::empty("test_api.py"),
            ],
        ),
        TemplateNode::literal(".env.example", ENV_EXAMPLE),
        TemplateNode::literal(".gitignore", GITIGNORE),
        TemplateNode::literal("requirements.txt", REQUIREMENTS_TXT),
        TemplateNode::generated("README.md", readme),
    ])
}

/// Full-stack app. Shares the portfolio tree; only the metadata differs.
pub fn fullstack() -> Template {
    Template::new(
        ProjectType::Fullstack,
        TemplateMetadata::new("FastAPI Full-stack")
            .description("Full-stack web app (same layout as portfolio)")
            .tags(["python", "fastapi", "fullstack", "docker"]),
    )
    .with_tree(web_app_tree())
}

fn web_app_tree() -> Vec<TemplateNode> {
    vec![
        app_package(),
        static_assets(),
        html_templates(),
        TemplateNode::dir(
            "tests",
            vec![
                TemplateNode::empty("__init__.py"),
                TemplateNode::empty("test_api.py"),
                TemplateNode::empty("test_database.py"),
                TemplateNode::empty("test_ml.py"),
            ],
        ),
        TemplateNode::dir(
            "alembic",
            vec![
                TemplateNode::empty_dir("versions"),
                TemplateNode::empty("env.py"),
            ],
        ),
        TemplateNode::literal(".env.example", ENV_EXAMPLE),
        TemplateNode::literal(".gitignore", GITIGNORE),
        TemplateNode::literal("requirements.txt", REQUIREMENTS_TXT),
        TemplateNode::generated("README.md", readme),
        TemplateNode::literal("Dockerfile", DOCKERFILE),
        TemplateNode::literal("docker-compose.yml", DOCKER_COMPOSE_YML),
        TemplateNode::literal("run.py", RUN_PY),
    ]
}

fn app_package() -> TemplateNode {
    TemplateNode::dir(
        "app",
        vec![
            TemplateNode::literal("__init__.py", APP_INIT_PY),
            TemplateNode::literal("main.py", MAIN_PY),
            TemplateNode::literal("config.py", CONFIG_PY),
            TemplateNode::empty("dependencies.py"),
            TemplateNode::dir(
                "api",
                vec![
                    TemplateNode::empty("__init__.py"),
                    TemplateNode::dir(
                        "routes",
                        vec![
                            TemplateNode::empty("__init__.py"),
                            TemplateNode::literal("pages.py", ROUTES_PAGES_PY),
                            TemplateNode::literal("chatbot.py", ROUTES_CHATBOT_PY),
                            TemplateNode::literal("email.py", ROUTES_EMAIL_PY),
                            TemplateNode::literal("contact.py", ROUTES_CONTACT_PY),
                            TemplateNode::literal("analytics.py", ROUTES_ANALYTICS_PY),
                        ],
                    ),
                    TemplateNode::dir(
                        "middleware",
                        vec![
                            TemplateNode::empty("__init__.py"),
                            TemplateNode::literal("analytics.py", MIDDLEWARE_ANALYTICS_PY),
                            TemplateNode::literal("security.py", MIDDLEWARE_SECURITY_PY),
                            TemplateNode::empty("error.py"),
                        ],
                    ),
                ],
            ),
            TemplateNode::dir(
                "core",
                vec![
                    TemplateNode::empty("__init__.py"),
                    TemplateNode::literal(
                        "graphrag.py",
                        "# Your GraphRAG implementation goes here",
                    ),
                    TemplateNode::literal(
                        "document_processor.py",
                        "# Your document processor goes here",
                    ),
                    TemplateNode::literal("knowledgegraph.py", "# Your knowledge graph goes here"),
                    TemplateNode::literal("queryengine.py", "# Your query engine goes here"),
                    TemplateNode::literal("email_generator.py", "# Your email generator goes here"),
                ],
            ),
            TemplateNode::dir(
                "database",
                vec![
                    TemplateNode::empty("__init__.py"),
                    TemplateNode::literal("models.py", MODELS_PY),
                    TemplateNode::literal("connection.py", CONNECTION_PY),
                    TemplateNode::literal("crud.py", "# CRUD operations go here"),
                ],
            ),
            TemplateNode::dir(
                "utils",
                vec![
                    TemplateNode::empty("__init__.py"),
                    TemplateNode::empty("session.py"),
                    TemplateNode::empty("validators.py"),
                ],
            ),
        ],
    )
}

fn static_assets() -> TemplateNode {
    TemplateNode::dir(
        "static",
        vec![
            TemplateNode::dir(
                "css",
                vec![
                    TemplateNode::literal("base.css", BASE_CSS),
                    TemplateNode::empty("components.css"),
                    TemplateNode::empty("utils.css"),
                    TemplateNode::dir(
                        "pages",
                        vec![
                            TemplateNode::empty("home.css"),
                            TemplateNode::empty("portfolio.css"),
                            TemplateNode::empty("chatbot.css"),
                            TemplateNode::empty("contact.css"),
                        ],
                    ),
                ],
            ),
            TemplateNode::dir(
                "js",
                vec![
                    TemplateNode::literal("main.js", MAIN_JS),
                    TemplateNode::dir(
                        "components",
                        vec![
                            TemplateNode::empty("navbar.js"),
                            TemplateNode::empty("footer.js"),
                            TemplateNode::empty("typing-effect.js"),
                        ],
                    ),
                    TemplateNode::dir(
                        "pages",
                        vec![
                            TemplateNode::empty("chatbot.js"),
                            TemplateNode::empty("email.js"),
                            TemplateNode::empty("contact.js"),
                        ],
                    ),
                ],
            ),
            TemplateNode::dir(
                "img",
                vec![
                    TemplateNode::empty_dir("logo"),
                    TemplateNode::empty_dir("projects"),
                    TemplateNode::empty_dir("backgrounds"),
                ],
            ),
        ],
    )
}

fn html_templates() -> TemplateNode {
    TemplateNode::dir(
        "templates",
        vec![
            TemplateNode::literal("base.html", BASE_HTML),
            TemplateNode::dir(
                "components",
                vec![
                    TemplateNode::literal("navbar.html", NAVBAR_HTML),
                    TemplateNode::literal("footer.html", FOOTER_HTML),
                    TemplateNode::empty("project-card.html"),
                ],
            ),
            TemplateNode::dir(
                "pages",
                vec![
                    TemplateNode::literal("home.html", HOME_HTML),
                    TemplateNode::empty("about.html"),
                    TemplateNode::empty("portfolio.html"),
                    TemplateNode::empty("chatbot.html"),
                    TemplateNode::empty("email-generator.html"),
                    TemplateNode::dir(
                        "project-details",
                        vec![
                            TemplateNode::empty("cancer-prediction.html"),
                            TemplateNode::empty("cold-email.html"),
                            TemplateNode::empty("object-detection.html"),
                        ],
                    ),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use mkwd_core::domain::{ProjectName, TreeNode};

    use super::*;

    fn render(template: &Template) -> TreeNode {
        template.render(&ProjectName::parse("demo").unwrap())
    }

    #[test]
    fn all_builtin_templates_validate() {
        for template in all_templates() {
            template
                .validate()
                .unwrap_or_else(|e| panic!("{} is invalid: {e}", template.project_type));
        }
    }

    #[test]
    fn all_templates_follow_project_type_order() {
        let types: Vec<ProjectType> = all_templates().iter().map(|t| t.project_type).collect();
        assert_eq!(types, ProjectType::ALL.to_vec());
    }

    #[test]
    fn portfolio_is_strictly_larger_than_api() {
        let portfolio = portfolio();
        let api = api();

        assert!(portfolio.file_count() > api.file_count());
        assert!(portfolio.directory_count() > api.directory_count());
    }

    #[test]
    fn fullstack_tree_equals_portfolio_tree() {
        assert_eq!(render(&fullstack()), render(&portfolio()));
        assert_ne!(fullstack().metadata, portfolio().metadata);
    }

    #[test]
    fn portfolio_layout_counts() {
        let template = portfolio();
        assert_eq!(template.file_count(), 66);
        assert_eq!(template.directory_count(), 24);
    }

    #[test]
    fn api_layout_counts() {
        let template = api();
        assert_eq!(template.file_count(), 16);
        assert_eq!(template.directory_count(), 5);
    }

    #[test]
    fn portfolio_keeps_empty_asset_directories() {
        let tree = render(&portfolio());

        for dir in [
            "static/img/logo",
            "static/img/projects",
            "static/img/backgrounds",
            "alembic/versions",
        ] {
            let node = tree.get(dir).unwrap_or_else(|| panic!("missing {dir}"));
            assert!(node.is_dir());
            assert!(node.entries().is_empty());
        }
    }

    #[test]
    fn root_files_come_after_directories() {
        let tree = render(&api());
        let names: Vec<&str> = tree.entries().iter().map(|e| e.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "app",
                "tests",
                ".env.example",
                ".gitignore",
                "requirements.txt",
                "README.md"
            ]
        );
    }

    #[test]
    fn app_init_differs_between_portfolio_and_api() {
        let portfolio = render(&portfolio());
        let api = render(&api());

        assert_eq!(
            portfolio.get("app/__init__.py").and_then(TreeNode::content),
            Some(APP_INIT_PY)
        );
        assert_eq!(api.get("app/__init__.py").and_then(TreeNode::content), Some(""));
        assert_eq!(api.get("app/database/models.py").and_then(TreeNode::content), Some(""));
    }
}
