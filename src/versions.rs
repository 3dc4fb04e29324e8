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

use crate::types::error::{Error, NoStorageVersionSnafu, VersionNotFoundSnafu};
use crate::types::v1::crd::CustomResourceDefinition;
use crate::types::v1::version::{
    CustomResourceColumnDefinition, CustomResourceDefinitionVersion, CustomResourceSubresources,
    CustomResourceValidation,
};
use kube::ResourceExt;
use snafu::OptionExt;

impl CustomResourceDefinition {
    pub fn find_version(&self, version: &str) -> Option<&CustomResourceDefinitionVersion> {
        self.spec.versions.iter().find(|v| v.name == version)
    }

    fn declared_version(&self, version: &str) -> Result<&CustomResourceDefinitionVersion, Error> {
        self.find_version(version).with_context(|| VersionNotFoundSnafu {
            name: self.name_any(),
            version,
        })
    }

    pub fn has_served_version(&self, version: &str) -> bool {
        self.find_version(version).is_some_and(|v| v.served)
    }

    /// Name of the version objects are persisted as.
    pub fn storage_version(&self) -> Result<&str, Error> {
        self.spec
            .versions
            .iter()
            .find(|v| v.storage)
            .map(|v| v.name.as_str())
            .with_context(|| NoStorageVersionSnafu {
                name: self.name_any(),
            })
    }

    /// Whether `version` appears in `status.storedVersions`.
    pub fn is_stored_version(&self, version: &str) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.stored_versions.iter().any(|v| v == version))
    }

    pub fn schema_for_version(
        &self,
        version: &str,
    ) -> Result<Option<&CustomResourceValidation>, Error> {
        Ok(self.declared_version(version)?.schema.as_ref())
    }

    pub fn subresources_for_version(
        &self,
        version: &str,
    ) -> Result<Option<&CustomResourceSubresources>, Error> {
        Ok(self.declared_version(version)?.subresources.as_ref())
    }

    pub fn columns_for_version(
        &self,
        version: &str,
    ) -> Result<&[CustomResourceColumnDefinition], Error> {
        Ok(self
            .declared_version(version)?
            .additional_printer_columns
            .as_slice())
    }

    /// Warning to return to clients of a deprecated version, `None` for
    /// versions that are not deprecated or not declared.
    pub fn deprecation_warning(&self, version: &str) -> Option<String> {
        let v = self.find_version(version).filter(|v| v.deprecated)?;
        Some(v.deprecation_warning.clone().unwrap_or_else(|| {
            format!(
                "{}/{} {} is deprecated",
                self.spec.group, v.name, self.spec.names.kind
            )
        }))
    }
}
