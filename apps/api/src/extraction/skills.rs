//! Fixed skill vocabulary for the heuristic extractor.
//!
//! Static configuration data, not control flow: extend the list, not the
//! matcher. All terms are lowercase; matching is a case-insensitive
//! substring test against the full resume text.

pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "bash",
    "c#",
    "c++",
    "css",
    "golang",
    "html",
    "java",
    "javascript",
    "kotlin",
    "matlab",
    "php",
    "python",
    "ruby",
    "rust",
    "scala",
    "sql",
    "swift",
    "typescript",
    // Frameworks
    "angular",
    "django",
    "express",
    "fastapi",
    "flask",
    "flutter",
    "laravel",
    "next.js",
    "node.js",
    "rails",
    "react",
    "spring",
    "svelte",
    "vue",
    // Datastores
    "cassandra",
    "dynamodb",
    "elasticsearch",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "sqlite",
    // Cloud / infra
    "ansible",
    "aws",
    "azure",
    "docker",
    "gcp",
    "github actions",
    "gitlab",
    "graphql",
    "jenkins",
    "kafka",
    "kubernetes",
    "linux",
    "nginx",
    "rabbitmq",
    "terraform",
    // Build tools
    "cmake",
    "gradle",
    "maven",
    "npm",
    "webpack",
    "yarn",
];
