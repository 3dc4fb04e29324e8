// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("approval url must have a scheme: {:?}", value))]
    UrlMissingScheme { value: String },

    #[snafu(display("approval url must have a host: {:?}", value))]
    UrlMissingHost { value: String },

    #[snafu(display("approval url contains a control character: {:?}", value))]
    UrlControlCharacter { value: String },

    #[snafu(display("not a url: {:?}: {}", value, source))]
    UrlUnparseable {
        value: String,
        source: http::uri::InvalidUri,
    },

    #[snafu(display("version '{}' not found in customresourcedefinition {}", version, name))]
    VersionNotFound { name: String, version: String },

    #[snafu(display("customresourcedefinition {} has no storage version", name))]
    NoStorageVersion { name: String },
}

impl Error {
    /// Whether the error came from classifying the approval annotation.
    pub fn is_invalid_approval(&self) -> bool {
        matches!(
            self,
            Error::UrlMissingScheme { .. }
                | Error::UrlMissingHost { .. }
                | Error::UrlUnparseable { .. }
                | Error::UrlControlCharacter { .. }
        )
    }
}
