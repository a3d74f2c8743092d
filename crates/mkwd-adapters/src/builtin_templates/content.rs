//! File bodies for the built-in templates.
//!
//! Static bodies are embedded from `assets/` at compile time. The README is
//! the only body computed from the project name.

// ── Python sources ──────────────────────────────────────────────────────────

/// Package marker for `app/` in the portfolio layout.
pub const APP_INIT_PY: &str = include_str!("../../assets/python/app_init.py");
/// FastAPI application factory.
pub const MAIN_PY: &str = include_str!("../../assets/python/main.py");
pub const CONFIG_PY: &str = include_str!("../../assets/python/config.py");
pub const MODELS_PY: &str = include_str!("../../assets/python/models.py");
pub const CONNECTION_PY: &str = include_str!("../../assets/python/connection.py");
pub const ROUTES_PAGES_PY: &str = include_str!("../../assets/python/routes/pages.py");
pub const ROUTES_CHATBOT_PY: &str = include_str!("../../assets/python/routes/chatbot.py");
pub const ROUTES_EMAIL_PY: &str = include_str!("../../assets/python/routes/email.py");
pub const ROUTES_CONTACT_PY: &str = include_str!("../../assets/python/routes/contact.py");
pub const ROUTES_ANALYTICS_PY: &str = include_str!("../../assets/python/routes/analytics.py");
pub const MIDDLEWARE_ANALYTICS_PY: &str =
    include_str!("../../assets/python/middleware/analytics.py");
pub const MIDDLEWARE_SECURITY_PY: &str = include_str!("../../assets/python/middleware/security.py");
/// Development server runner at the project root.
pub const RUN_PY: &str = include_str!("../../assets/python/run.py");

// ── Static assets and Jinja2 templates ──────────────────────────────────────

pub const BASE_CSS: &str = include_str!("../../assets/web/base.css");
pub const MAIN_JS: &str = include_str!("../../assets/web/main.js");
/// Jinja2 base layout.
pub const BASE_HTML: &str = include_str!("../../assets/web/base.html");
pub const NAVBAR_HTML: &str = include_str!("../../assets/web/navbar.html");
pub const FOOTER_HTML: &str = include_str!("../../assets/web/footer.html");
pub const HOME_HTML: &str = include_str!("../../assets/web/home.html");

// ── Project-root files ──────────────────────────────────────────────────────

pub const ENV_EXAMPLE: &str = include_str!("../../assets/project/env.example");
pub const GITIGNORE: &str = include_str!("../../assets/project/gitignore");
/// Pinned dependencies shared by every project type.
pub const REQUIREMENTS_TXT: &str = include_str!("../../assets/project/requirements.txt");
pub const DOCKERFILE: &str = include_str!("../../assets/project/Dockerfile");
pub const DOCKER_COMPOSE_YML: &str = include_str!("../../assets/project/docker-compose.yml");

// ── Generated ─────────────────────────────────────────────────────────────────

/// README for a new project. `name` appears in the title and as the root of
/// the project-structure block.
pub fn readme(name: &str) -> String {
    format!(
        r##"# {name}

Professional web application built with FastAPI.

## Quick Start

```bash
# Setup
python -m venv venv
source venv/bin/activate  # Windows: venv\Scripts\activate
pip install -r requirements.txt

# Configure
cp .env.example .env
# Edit .env with your settings

# Run
python app/main.py
```

Visit: http://localhost:8080

## Features

- ✅ Modern FastAPI backend
- ✅ SQLAlchemy database integration
- ✅ Professional project structure
- ✅ Analytics tracking
- ✅ API documentation at /api/docs

## Project Structure

```
{name}/
├── app/           # Application code
├── static/        # Static assets
├── templates/     # HTML templates
├── tests/         # Tests
└── alembic/       # Database migrations
```

## Development

```bash
# Run with auto-reload
python app/main.py

# Run tests
pytest

# Database migrations
alembic revision --autogenerate -m "description"
alembic upgrade head
```
"##
    )
}
