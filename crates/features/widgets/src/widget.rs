use crate::error::WidgetError;
use skit_domain::{AreaStyle, WidgetWidth};
use skit_kernel::graph::AreaMeta;
use skit_kernel::requirement::Requirement;
use skit_kernel::resolver::Candidate;
use skit_kernel::Component;
use std::str::FromStr;
use strum::VariantNames;

/// Unvalidated widget registration input.
#[derive(Debug, Clone)]
pub struct WidgetSpec {
    pub component: Option<Component>,
    pub priority: Option<i32>,
    /// Width slugs; empty means quarter.
    pub widths: Vec<String>,
    pub wrap_widget: bool,
    /// Module slugs the widget depends on.
    pub modules: Vec<String>,
    pub is_dismissible: bool,
    /// Dismissed-items key if it differs from the widget slug.
    pub dismissal_key: Option<String>,
    pub requirement: Option<Requirement>,
}

impl Default for WidgetSpec {
    fn default() -> Self {
        Self {
            component: None,
            priority: None,
            widths: Vec::new(),
            wrap_widget: true,
            modules: Vec::new(),
            is_dismissible: false,
            dismissal_key: None,
            requirement: None,
        }
    }
}

impl WidgetSpec {
    #[must_use]
    pub fn new(component: Component) -> Self {
        Self { component: Some(component), ..Self::default() }
    }

    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl AsRef<str>) -> Self {
        self.widths.push(width.as_ref().to_owned());
        self
    }

    #[must_use]
    pub const fn wrap_widget(mut self, wrap: bool) -> Self {
        self.wrap_widget = wrap;
        self
    }

    #[must_use]
    pub fn module(mut self, slug: impl Into<String>) -> Self {
        self.modules.push(slug.into());
        self
    }

    #[must_use]
    pub fn dismissible_as(mut self, key: impl Into<String>) -> Self {
        self.is_dismissible = true;
        self.dismissal_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }
}

/// A validated, registered widget.
#[derive(Debug, Clone)]
pub struct Widget {
    pub component: Component,
    pub priority: i32,
    pub widths: Vec<WidgetWidth>,
    pub wrap_widget: bool,
    pub modules: Vec<String>,
    pub is_dismissible: bool,
    pub dismissal_key: Option<String>,
    pub requirement: Option<Requirement>,
}

impl Widget {
    /// # Errors
    /// [`WidgetError::Validation`] for a missing component or an unknown width.
    pub fn from_spec(spec: WidgetSpec, default_priority: i32) -> Result<Self, WidgetError> {
        let component = spec
            .component
            .ok_or_else(|| WidgetError::validation("Component is required to register a widget."))?;

        let mut widths = spec
            .widths
            .iter()
            .map(|width| {
                WidgetWidth::from_str(width).map_err(|_| {
                    WidgetError::validation(format!(
                        "Widget width should be one of: {}, but \"{width}\" was provided.",
                        WidgetWidth::VARIANTS.join(", "),
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if widths.is_empty() {
            widths.push(WidgetWidth::default());
        }

        Ok(Self {
            component,
            priority: spec.priority.unwrap_or(default_priority),
            widths,
            wrap_widget: spec.wrap_widget,
            modules: spec.modules,
            is_dismissible: spec.is_dismissible,
            dismissal_key: spec.dismissal_key,
            requirement: spec.requirement,
        })
    }

    #[must_use]
    pub fn depends_on(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}

impl Candidate for Widget {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn requirement(&self) -> Option<&Requirement> {
        self.requirement.as_ref()
    }

    fn is_dismissible(&self) -> bool {
        self.is_dismissible
    }

    fn dismissal_key<'a>(&'a self, id: &'a str) -> &'a str {
        self.dismissal_key.as_deref().unwrap_or(id)
    }
}

/// Widget area registration input.
#[derive(Debug, Clone, Default)]
pub struct WidgetAreaSpec {
    pub title: String,
    pub subtitle: Option<String>,
    pub style: AreaStyle,
    pub priority: Option<i32>,
}

impl WidgetAreaSpec {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub const fn style(mut self, style: AreaStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(crate) fn into_meta(self, default_priority: i32) -> AreaMeta {
        AreaMeta {
            title: self.title,
            subtitle: self.subtitle,
            style: self.style,
            priority: self.priority.unwrap_or(default_priority),
        }
    }
}
