//! Curated skill vocabulary used for text-based skill extraction

/// Every skill term the extractor recognizes, lower-cased.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "go", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "r", "matlab", "perl", "dart", "lua",

    // Frontend
    "react", "angular", "vue", "vue.js", "next.js", "nuxt.js", "svelte", "html", "css",
    "sass", "scss", "tailwind", "tailwind css", "bootstrap", "material ui", "jquery",
    "redux", "webpack", "vite", "figma", "responsive design",

    // Backend
    "node.js", "express", "express.js", "django", "flask", "fastapi", "spring boot",
    "spring", "rails", "ruby on rails", "asp.net", "laravel", "nestjs", "graphql",
    "rest api", "restful", "microservices",

    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "sqlite",
    "oracle", "cassandra", "dynamodb", "firebase", "supabase",

    // Cloud & DevOps
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "terraform",
    "jenkins", "ci/cd", "github actions", "gitlab ci", "ansible", "nginx",
    "linux", "bash", "shell scripting",

    // Data & AI/ML
    "machine learning", "deep learning", "data analysis", "data science",
    "artificial intelligence", "nlp", "natural language processing",
    "computer vision", "tensorflow", "pytorch", "keras", "scikit-learn",
    "pandas", "numpy", "matplotlib", "tableau", "power bi", "spark",
    "hadoop", "big data", "data visualization", "statistics",

    // Mobile
    "react native", "flutter", "android", "ios", "swiftui", "jetpack compose",

    // Tools & Practices
    "git", "github", "gitlab", "jira", "agile", "scrum", "kanban",
    "unit testing", "tdd", "test driven development", "selenium", "cypress",
    "postman", "swagger",

    // Soft Skills
    "communication", "leadership", "teamwork", "problem solving",
    "project management", "time management", "critical thinking",
    "presentation", "collaboration",
];

/// The subset of the vocabulary treated as soft skills in gap recommendations.
pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving",
    "project management", "time management", "critical thinking",
    "presentation", "collaboration",
];

/// Terms this short only match on word boundaries.
pub const SHORT_TERM_MAX_LEN: usize = 2;

pub fn is_soft_skill(term: &str) -> bool {
    let term = term.trim().to_lowercase();
    SOFT_SKILLS.contains(&term.as_str())
}

pub fn is_short_term(term: &str) -> bool {
    term.chars().count() <= SHORT_TERM_MAX_LEN
}
