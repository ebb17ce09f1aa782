// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static tables describing the platform's vocabulary: languages and their
//! package managers, library types, token scopes, alert types and roles.
//!
//! Everything here is a fixed table; lookups never inspect types at runtime.

use serde::Serialize;
use std::fmt;

/// Metadata about a supported language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LibMetadata {
    /// Lowercase language name.
    pub language: &'static str,
    /// Package managers the agent resolves for this language.
    pub package_managers: &'static [&'static str],
    /// Common source or artifact file suffixes.
    pub file_suffixes: &'static [&'static str],
}

/// Every language the catalog knows about.
pub const LIB_METADATA: &[LibMetadata] = &[
    LibMetadata {
        language: "java",
        package_managers: &["maven", "gradle", "ant"],
        file_suffixes: &["jar"],
    },
    LibMetadata {
        language: "python",
        package_managers: &["pip"],
        file_suffixes: &["py"],
    },
    LibMetadata {
        language: "javascript",
        package_managers: &["npm", "bower", "nuget"],
        file_suffixes: &["js"],
    },
    LibMetadata {
        language: "ruby",
        package_managers: &["rubygems"],
        file_suffixes: &["rb"],
    },
    LibMetadata {
        language: ".net",
        package_managers: &["nuget"],
        file_suffixes: &["cs"],
    },
    LibMetadata {
        language: "rust",
        package_managers: &["cargo"],
        file_suffixes: &["rs", "rlib"],
    },
    LibMetadata {
        language: "go",
        package_managers: &[],
        file_suffixes: &["go"],
    },
    LibMetadata {
        language: "r",
        package_managers: &[],
        file_suffixes: &["r"],
    },
    LibMetadata {
        language: "objc",
        package_managers: &["cocoapods"],
        file_suffixes: &[".h", ".m", ".mm", ".M"],
    },
];

/// Looks up a language, case-insensitively.
///
/// # Examples
///
/// ```
/// use uacfg::catalog::lib_metadata_by_name;
///
/// let java = lib_metadata_by_name("Java").unwrap();
/// assert_eq!(java.package_managers, &["maven", "gradle", "ant"]);
/// assert!(lib_metadata_by_name("cobol").is_none());
/// ```
pub fn lib_metadata_by_name(language: &str) -> Option<&'static LibMetadata> {
    let lc_lang = language.to_lowercase();
    let found = LIB_METADATA.iter().find(|m| m.language == lc_lang);
    if found.is_none() {
        tracing::error!("Language '{}' is unsupported", language);
    }
    found
}

/// Returns the package managers of a language, if the language is known.
pub fn package_managers_by_language(language: &str) -> Option<&'static [&'static str]> {
    lib_metadata_by_name(language).map(|m| m.package_managers)
}

/// Declares a string-valued enum with `as_str`, `ALL` and `Display`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The platform's name for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Library types accepted by library search.
    LibType {
        /// Java (Maven coordinates)
        Java => "maven",
        /// Python
        Python => "pypi",
        /// Go
        Go => "go",
        /// Docker image
        Docker => "docker",
        /// .NET
        DotNet => ".net",
        /// ActionScript
        ActionScript => "actionscript",
        /// Alpine package
        Alpine => "alpine",
        /// Debian package
        Debian => "debian",
        /// Docker image layer
        DockerLayer => "docker_layer",
        /// Erlang / Elixir (Hex)
        Erlang => "hex",
        /// Haskell
        Haskell => "haskell",
        /// Bower
        JsBower => "bower",
        /// npm
        JsNpm => "npm",
        /// OCaml
        OCaml => "ocaml",
        /// PHP
        Php => "php",
        /// R
        R => "R",
        /// RPM package
        Rpm => "RPM",
        /// Ruby
        Ruby => "Ruby",
        /// Rust
        Rust => "Rust",
        /// Objective-C (CocoaPods)
        ObjC => "cocoaPods",
        /// NuGet
        Nuget => "Nuget",
    }
}

string_enum! {
    /// Scope a token belongs to.
    TokenType {
        /// Organization token
        Organization => "organization",
        /// Product token
        Product => "product",
        /// Project token
        Project => "project",
    }
}

impl TokenType {
    /// Name of the request parameter carrying a token of this scope.
    pub fn param_name(&self) -> &'static str {
        match self {
            TokenType::Organization => "orgToken",
            TokenType::Product => "productToken",
            TokenType::Project => "projectToken",
        }
    }
}

string_enum! {
    /// Alert types reported by the platform.
    AlertType {
        /// Known vulnerability
        SecurityVulnerability => "SECURITY_VULNERABILITY",
        /// New major version available
        NewMajorVersion => "NEW_MAJOR_VERSION",
        /// New minor version available
        NewMinorVersion => "NEW_MINOR_VERSION",
        /// Several versions of the same library in use
        MultipleLibraryVersions => "MULTIPLE_LIBRARY_VERSIONS",
        /// Rejected by a policy
        RejectedByPolicyResource => "REJECTED_BY_POLICY_RESOURCE",
    }
}

string_enum! {
    /// Alert statuses.
    AlertStatus {
        /// Active alert
        Active => "Active",
        /// Ignored alert
        Ignored => "Ignored",
        /// Resolved alert
        Resolved => "Resolved",
    }
}

impl AlertStatus {
    /// Statuses a caller may set on an alert.
    pub const SETTABLE: &'static [AlertStatus] = &[AlertStatus::Active, AlertStatus::Ignored];
}

string_enum! {
    /// Roles that can be assigned to users and groups.
    RoleType {
        /// Default approver
        DefaultApprover => "DEFAULT_APPROVER",
        /// Product integrator
        ProductIntegrator => "PRODUCT_INTEGRATOR",
        /// Administrator
        Admin => "ADMIN",
    }
}
