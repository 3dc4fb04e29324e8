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

//! Approval classification and status bookkeeping for
//! CustomResourceDefinitions.
//!
//! Everything here is synchronous and operates on a caller-owned
//! [`CustomResourceDefinition`]; persisting the result is left to the
//! controller that owns the object.

pub mod approval;
mod conditions;
mod finalizers;
pub mod types;
pub mod utils;
mod versions;


pub use approval::{ApprovalState, ProtectedGroups, api_approval_state, approval_condition};
pub use types::error::Error;
pub use types::v1::crd::{CustomResourceDefinition, CustomResourceDefinitionSpec};
pub use types::v1::status::condition::{Condition, ConditionStatus, ConditionType};
pub use utils::clock::{Clock, FixedClock, SystemClock};
