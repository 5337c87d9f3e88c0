// SPDX-License-Identifier: MPL-2.0
//! Application layer: abstract interfaces between state components and
//! their runtime environment.

pub mod port;
