// SPDX-License-Identifier: Apache-2.0 OR MIT
/// Directory, relative to the working directory, holding the raw fixtures.
pub const DEFAULT_SNIPPET_DIR: &str = "rawsnippets";

/// Declares one snippet and the fixture file its body comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetSource {
    /// Key of the snippet in the generated document.
    pub name: &'static str,
    /// Trigger text typed in the editor.
    pub prefix: &'static str,
    /// Explanation shown with the completion.
    pub description: &'static str,
    /// Fixture file name, resolved against the snippet directory.
    pub file: &'static str,
}

impl SnippetSource {
    const fn new(
        name: &'static str,
        prefix: &'static str,
        description: &'static str,
        file: &'static str,
    ) -> Self {
        Self {
            name,
            prefix,
            description,
            file,
        }
    }
}

/// Every snippet shipped with the extension, in assembly order.
pub const SNIPPET_SOURCES: &[SnippetSource] = &[
    SnippetSource::new("Secret", "kindSecret", "Create a Secret manifest", "secret.yaml"),
    SnippetSource::new("Pod", "kindPod", "Create a Pod manifest", "pod.yaml"),
    SnippetSource::new(
        "ConfigMap",
        "kindConfigMap",
        "Create a ConfigMap manifest",
        "configmap.yaml",
    ),
    SnippetSource::new(
        "Deployment",
        "kindDeployment",
        "Create a Deployment manifest",
        "deployment.yaml",
    ),
    SnippetSource::new("Service", "kindService", "Create a Service manifest", "service.yaml"),
    SnippetSource::new("Ingress", "kindIngress", "Create a Ingress manifest", "ingress.yaml"),
    SnippetSource::new("Chart.yaml", "Chart.yaml", "Create a Chart.yaml file", "Chart.yaml"),
    SnippetSource::new(
        "requirements.yaml",
        "requirements.yaml",
        "Create a Helm requirements.yaml",
        "requirements.yaml",
    ),
    // template language
    SnippetSource::new("range-list", "rangeList", "Loop over a list", "range-list.tpl"),
    SnippetSource::new("range-map", "rangeDict", "Loop over a dict or map", "range-map.tpl"),
    SnippetSource::new(
        "range-until",
        "rangeUntil",
        "Loop a fixed number of times.",
        "range-until.tpl",
    ),
    SnippetSource::new("if", "if", "Create a conditional", "if.tpl"),
    SnippetSource::new(
        "ifelse",
        "ifElse",
        "Create a conditional with else if, else",
        "ifelse.tpl",
    ),
    SnippetSource::new("with", "with", "Create a with block", "with.tpl"),
    SnippetSource::new("define", "define", "Define a template", "define.tpl"),
];
