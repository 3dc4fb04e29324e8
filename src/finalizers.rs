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

use crate::types::v1::crd::CustomResourceDefinition;
use kube::ResourceExt;
use tracing::trace;

impl CustomResourceDefinition {
    pub fn has_finalizer(&self, name: &str) -> bool {
        self.finalizers().iter().any(|f| f == name)
    }

    /// Removes every occurrence of `name`. Duplicates of other finalizers
    /// are left as they are.
    pub fn remove_finalizer(&mut self, name: &str) {
        let Some(finalizers) = self.metadata.finalizers.as_mut() else {
            return;
        };

        let before = finalizers.len();
        finalizers.retain(|f| f != name);
        if finalizers.len() != before {
            trace!(crd = %self.name_any(), finalizer = name, "removed finalizer");
        }
    }
}
