// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::v1::version::CustomResourceDefinitionVersion;
use kube::{CustomResource, KubeSchema};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

/// The in-memory CustomResourceDefinition the helpers operate on.
///
/// Only the parts the approval and status logic read are modelled; the
/// rest of the apiextensions schema is owned by the API server.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, KubeSchema, Default)]
#[kube(
    group = "apiextensions.k8s.io",
    version = "v1",
    kind = "CustomResourceDefinition",
    status = "crate::types::v1::status::CustomResourceDefinitionStatus",
    shortname = "crd",
    plural = "customresourcedefinitions",
    singular = "customresourcedefinition",
    printcolumn = r#"{"name":"Group", "type":"string", "jsonPath":".spec.group"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#,
    crates(serde_json = "k8s_openapi::serde_json")
)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinitionSpec {
    /// API group of the defined resources, e.g. `sigs.k8s.io`.
    pub group: String,

    pub names: CustomResourceDefinitionNames,

    #[serde(default)]
    pub scope: ResourceScope,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<CustomResourceDefinitionVersion>,
}

#[derive(Deserialize, Serialize, Clone, Debug, KubeSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinitionNames {
    pub plural: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,

    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, Display, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
#[schemars(rename_all = "PascalCase")]
pub enum ResourceScope {
    #[strum(to_string = "Cluster")]
    Cluster,

    #[strum(to_string = "Namespaced")]
    #[default]
    Namespaced,
}
