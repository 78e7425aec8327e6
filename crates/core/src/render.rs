//! Template rendering
//!
//! The generator only depends on the [`Renderer`] capability. [`TemplateSet`]
//! is the production implementation, a minijinja environment holding exactly
//! the templates of one run.

use minijinja::{context, Environment, ErrorKind};

use crate::context::{NamespaceStyle, TemplateContext};
use crate::Error;

/// File name suffix of templates stored on disk.
pub const TEMPLATE_SUFFIX: &str = ".jinja";

/// Templates compiled into the binary, keyed by template identifier.
pub const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "client.generated.hpp",
        include_str!("../templates/client.generated.hpp.jinja"),
    ),
    (
        "client.generated.cpp",
        include_str!("../templates/client.generated.cpp.jinja"),
    ),
    (
        "service.generated.hpp",
        include_str!("../templates/service.generated.hpp.jinja"),
    ),
    (
        "service.generated.cpp",
        include_str!("../templates/service.generated.cpp.jinja"),
    ),
];

/// Turns a template identifier and a context into generated text.
pub trait Renderer {
    /// Fails with [`Error::TemplateNotFound`] when `template` is not part of
    /// the set.
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String, Error>;
}

pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Template set made of [`EMBEDDED_TEMPLATES`].
    pub fn embedded(style: NamespaceStyle) -> Result<Self, Error> {
        let mut env = new_environment(style);
        for &(name, source) in EMBEDDED_TEMPLATES {
            env.add_template(name, source)
                .map_err(|source| Error::InvalidTemplate {
                    name: name.to_string(),
                    source,
                })?;
        }
        Ok(TemplateSet { env })
    }

    /// Template set made of `(identifier, source)` pairs, e.g. read from a
    /// template directory.
    pub fn from_sources<I>(sources: I, style: NamespaceStyle) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = new_environment(style);
        for (name, source) in sources {
            env.add_template_owned(name.clone(), source)
                .map_err(|source| Error::InvalidTemplate { name, source })?;
        }
        Ok(TemplateSet { env })
    }
}

impl Renderer for TemplateSet {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String, Error> {
        let tmpl = self.env.get_template(template).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                Error::TemplateNotFound(template.to_string())
            } else {
                Error::Render {
                    template: template.to_string(),
                    source: err,
                }
            }
        })?;

        tmpl.render(context! { proto => context })
            .map_err(|source| Error::Render {
                template: template.to_string(),
                source,
            })
    }
}

fn new_environment(style: NamespaceStyle) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("scope_name", move |name: String| style.apply(&name));
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Method, Service};

    fn fixture_context() -> TemplateContext {
        TemplateContext {
            source_file: "samples/greeter.proto".to_string(),
            source_file_stem: "samples/greeter".to_string(),
            package_prefix: "samples.api.".to_string(),
            namespace: "samples::api".to_string(),
            services: vec![Service {
                name: "GreeterService".to_string(),
                method: vec![Method {
                    name: "SayHello".to_string(),
                    input_type: ".samples.api.GreetingRequest".to_string(),
                    output_type: ".samples.api.GreetingResponse".to_string(),
                    client_streaming: false,
                    server_streaming: false,
                }],
            }],
        }
    }

    fn sources(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()))
            .collect()
    }

    #[test]
    fn test_embedded_set_has_every_template() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();
        for id in [
            "client.generated.hpp",
            "client.generated.cpp",
            "service.generated.hpp",
            "service.generated.cpp",
        ] {
            assert!(
                set.render(id, &fixture_context()).is_ok(),
                "missing embedded template {id}"
            );
        }
    }

    #[test]
    fn test_embedded_templates_render_service_names() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();
        let context = fixture_context();

        for (id, _) in EMBEDDED_TEMPLATES {
            let text = set.render(id, &context).unwrap();
            assert!(text.contains("GreeterService"), "{id} did not mention service");
            assert!(text.contains("samples::api"), "{id} did not open namespace");
        }
    }

    #[test]
    fn test_embedded_templates_without_package_open_no_namespace() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();
        let mut context = fixture_context();
        context.package_prefix = String::new();
        context.namespace = String::new();

        for (id, _) in EMBEDDED_TEMPLATES {
            let text = set.render(id, &context).unwrap();
            assert!(!text.contains("namespace  {"), "{id} opened an anonymous namespace");
            assert!(!text.contains("// namespace"), "{id} closed a namespace it never opened");
            assert!(text.contains("GreeterService"), "{id} did not mention service");
        }
    }

    #[test]
    fn test_embedded_templates_close_the_namespace_they_open() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();

        for (id, _) in EMBEDDED_TEMPLATES {
            let text = set.render(id, &fixture_context()).unwrap();
            assert!(text.contains("namespace samples::api {\n"), "{id} did not open namespace");
            assert!(text.contains("}  // namespace samples::api\n"), "{id} did not close namespace");
        }
    }

    #[test]
    fn test_embedded_client_header_includes_proto_header() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();
        let text = set
            .render("client.generated.hpp", &fixture_context())
            .unwrap();

        assert!(text.contains("#include \"samples/greeter.pb.h\""));
        assert!(text.contains("SayHello"));
    }

    #[test]
    fn test_embedded_client_header_describes_blocking_wrapper() {
        let set = TemplateSet::embedded(NamespaceStyle::Cpp).unwrap();
        let text = set
            .render("client.generated.hpp", &fixture_context())
            .unwrap();

        assert!(text.contains("// Client wrapper for samples.api.GreeterService"));
        assert!(!text.contains("Asynchronous"));
    }

    #[test]
    fn test_context_is_exposed_as_proto() {
        let set = TemplateSet::from_sources(
            sources(&[("t", "{{ proto.source_file }}|{{ proto.package_prefix }}")]),
            NamespaceStyle::Cpp,
        )
        .unwrap();

        let text = set.render("t", &fixture_context()).unwrap();
        assert_eq!(text, "samples/greeter.proto|samples.api.");
    }

    #[test]
    fn test_scope_name_filter_follows_style() {
        let template = "{{ proto.services[0].method[0].input_type | scope_name }}";

        let cpp = TemplateSet::from_sources(sources(&[("t", template)]), NamespaceStyle::Cpp)
            .unwrap();
        assert_eq!(
            cpp.render("t", &fixture_context()).unwrap(),
            "::samples::api::GreetingRequest"
        );

        let path = TemplateSet::from_sources(sources(&[("t", template)]), NamespaceStyle::Path)
            .unwrap();
        assert_eq!(
            path.render("t", &fixture_context()).unwrap(),
            "/samples/api/GreetingRequest"
        );
    }

    #[test]
    fn test_trim_and_lstrip_blocks() {
        let template = "{% for s in proto.services %}\n    {% if true %}\n{{ s.name }}\n    {% endif %}\n{% endfor %}\n";
        let set = TemplateSet::from_sources(sources(&[("t", template)]), NamespaceStyle::Cpp)
            .unwrap();

        assert_eq!(set.render("t", &fixture_context()).unwrap(), "GreeterService\n");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let set = TemplateSet::from_sources(Vec::new(), NamespaceStyle::Cpp).unwrap();
        let err = set
            .render("client.generated.hpp", &fixture_context())
            .unwrap_err();

        assert!(matches!(err, Error::TemplateNotFound(ref id) if id == "client.generated.hpp"));
    }

    #[test]
    fn test_invalid_template_source_is_rejected() {
        let result =
            TemplateSet::from_sources(sources(&[("t", "{% for %}")]), NamespaceStyle::Cpp);
        assert!(matches!(result, Err(Error::InvalidTemplate { ref name, .. }) if name == "t"));
    }

    #[test]
    fn test_runtime_failure_is_render_error() {
        let set = TemplateSet::from_sources(
            sources(&[("t", "{{ proto.missing.deeper }}")]),
            NamespaceStyle::Cpp,
        )
        .unwrap();

        let err = set.render("t", &fixture_context()).unwrap_err();
        assert!(matches!(err, Error::Render { ref template, .. } if template == "t"));
    }
}
