// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

mod args;
mod router;

pub use args::Args;
pub use router::{RouteError, RoutedArgs, route};
