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

//! API approval classification for CustomResourceDefinitions in protected
//! community groups.
//!
//! A definition in `*.k8s.io` or `*.kubernetes.io` must carry the
//! `api-approved.kubernetes.io` annotation, whose value is either a link to
//! the approving pull request or an explicit `unapproved...` bypass.

use crate::types::error::{
    Error, UrlControlCharacterSnafu, UrlMissingHostSnafu, UrlMissingSchemeSnafu,
    UrlUnparseableSnafu,
};
use crate::types::v1::crd::CustomResourceDefinition;
use crate::types::v1::status::condition::{Condition, ConditionStatus, ConditionType};
use http::uri::Authority;
use kube::ResourceExt;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use std::collections::BTreeMap;
use strum::Display;

pub const API_APPROVED_ANNOTATION: &str = "api-approved.kubernetes.io";

/// Root domains whose groups require API approval.
pub const DEFAULT_PROTECTED_DOMAINS: [&str; 2] = ["k8s.io", "kubernetes.io"];

const UNAPPROVED_PREFIX: &str = "unapproved";

const APPROVAL_POLICY_URL: &str = "https://github.com/kubernetes/enhancements/pull/1111";

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ApprovalState {
    /// The annotation links to the approving change.
    #[strum(to_string = "APIApproved")]
    Approved,

    /// The annotation explicitly opts out with an `unapproved` value.
    #[strum(to_string = "APIApprovalBypassed")]
    Bypassed,

    #[strum(to_string = "APIApprovalMissing")]
    Missing,

    #[strum(to_string = "APIApprovalInvalid")]
    Invalid,
}

/// Classifies the approval annotation.
///
/// The error is only set for [`ApprovalState::Invalid`] and says which URL
/// constraint the value broke.
pub fn api_approval_state(annotations: &BTreeMap<String, String>) -> (ApprovalState, Option<Error>) {
    let value = match annotations.get(API_APPROVED_ANNOTATION) {
        Some(value) if !value.is_empty() => value,
        _ => return (ApprovalState::Missing, None),
    };

    if value.starts_with(UNAPPROVED_PREFIX) {
        return (ApprovalState::Bypassed, None);
    }

    match validate_approval_url(value) {
        Ok(()) => (ApprovalState::Approved, None),
        Err(e) => (ApprovalState::Invalid, Some(e)),
    }
}

/// Checks that `value` is an absolute URL with a scheme and a host.
///
/// Only the scheme and authority are validated. Anything after the
/// authority is free text, so a trailing note such as `, approved` is fine.
fn validate_approval_url(value: &str) -> Result<(), Error> {
    ensure!(
        !value.chars().any(|c| c.is_ascii_control()),
        UrlControlCharacterSnafu { value }
    );

    let Some((scheme, rest)) = value.split_once("://") else {
        // `scheme:opaque` has a scheme but never a host.
        return match value.split_once(':') {
            Some((scheme, _)) if is_scheme(scheme) => UrlMissingHostSnafu { value }.fail(),
            _ => UrlMissingSchemeSnafu { value }.fail(),
        };
    };
    ensure!(is_scheme(scheme), UrlMissingSchemeSnafu { value });

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    ensure!(!authority.is_empty(), UrlMissingHostSnafu { value });

    let authority = authority
        .parse::<Authority>()
        .context(UrlUnparseableSnafu { value })?;
    ensure!(!authority.host().is_empty(), UrlMissingHostSnafu { value });

    Ok(())
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// The set of API groups that require approval.
///
/// A group is protected when it equals one of the domains or is a
/// subdomain of one, matched on whole labels.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedGroups {
    pub domains: Vec<String>,
}

impl Default for ProtectedGroups {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_DOMAINS)
    }
}

impl ProtectedGroups {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_protected(&self, group: &str) -> bool {
        self.domains.iter().any(|domain| {
            group == domain
                || group
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl CustomResourceDefinition {
    pub fn api_approval_state(&self) -> (ApprovalState, Option<Error>) {
        api_approval_state(self.annotations())
    }
}

/// The `KubernetesAPIApprovalPolicyConformant` condition for `crd`, or
/// `None` when its group is not protected.
///
/// The transition time is left unset for the condition ledger to decide.
pub fn approval_condition(
    crd: &CustomResourceDefinition,
    groups: &ProtectedGroups,
) -> Option<Condition> {
    if !groups.is_protected(&crd.spec.group) {
        return None;
    }

    let value = crd
        .annotations()
        .get(API_APPROVED_ANNOTATION)
        .map(String::as_str)
        .unwrap_or_default();

    let (status, reason, message) = match crd.api_approval_state() {
        (ApprovalState::Approved, _) => (
            ConditionStatus::True,
            "ApprovedAnnotation",
            format!("approved in {}", value),
        ),
        (ApprovalState::Bypassed, _) => (
            ConditionStatus::False,
            "UnapprovedAnnotation",
            format!("not approved: {:?}", value),
        ),
        (ApprovalState::Missing, _) => (
            ConditionStatus::False,
            "MissingAnnotation",
            format!(
                "protected groups must have approval annotation {:?}, see {}",
                API_APPROVED_ANNOTATION, APPROVAL_POLICY_URL
            ),
        ),
        (ApprovalState::Invalid, error) => (
            ConditionStatus::False,
            "InvalidAnnotation",
            error.map(|e| e.to_string()).unwrap_or_default(),
        ),
    };

    Some(Condition::new(
        ConditionType::KubernetesApiApprovalPolicyConformant,
        status,
        reason,
        message,
    ))
}
