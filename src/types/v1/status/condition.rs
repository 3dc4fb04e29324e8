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

use chrono::{DateTime, Utc};
use kube::KubeSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Aspect of a CustomResourceDefinition a condition reports on.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, Display, PartialEq, Eq, Hash)]
pub enum ConditionType {
    /// The API server has started serving the resource.
    #[strum(to_string = "Established")]
    Established,

    /// The requested names are free of conflicts.
    #[strum(to_string = "NamesAccepted")]
    NamesAccepted,

    #[strum(to_string = "NonStructuralSchema")]
    NonStructuralSchema,

    /// Instances are being cleaned up before the definition is deleted.
    #[strum(to_string = "Terminating")]
    Terminating,

    /// A protected group carries a valid approval annotation.
    #[serde(rename = "KubernetesAPIApprovalPolicyConformant")]
    #[strum(to_string = "KubernetesAPIApprovalPolicyConformant")]
    KubernetesApiApprovalPolicyConformant,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, Display, PartialEq, Eq, Hash)]
pub enum ConditionStatus {
    #[strum(to_string = "True")]
    True,

    #[strum(to_string = "False")]
    False,

    #[strum(to_string = "Unknown")]
    Unknown,
}

#[derive(Deserialize, Serialize, Clone, Debug, KubeSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: ConditionType,

    pub status: ConditionStatus,

    /// `None` until the condition is recorded; the ledger fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Condition {
    pub fn new(
        type_: ConditionType,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            type_,
            status,
            last_transition_time: None,
            reason: reason.into(),
            message: message.into(),
        }
    }

    pub fn with_transition_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_transition_time = Some(time);
        self
    }

    /// Compares everything except `last_transition_time`.
    pub fn is_equivalent(&self, other: &Condition) -> bool {
        self.type_ == other.type_
            && self.status == other.status
            && self.reason == other.reason
            && self.message == other.message
    }
}
