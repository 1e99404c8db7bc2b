use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Alias → canonical skill name lookup (O(1)).
///
/// Every canonical name maps to itself; aliases map to their canonical entry.
/// First writer wins when an alias appears under two canonical entries.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // Languages
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6", "es2020"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("python", &["py", "python3", "python 3", "python"]),
        ("java", &["java8", "java11", "java17", "openjdk", "jdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("golang", &["go", "go lang", "golang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("php", &["php7", "php8", "php"]),
        ("ruby", &["ruby lang", "ruby"]),
        ("kotlin", &["kotlin jvm", "kotlin"]),
        ("swift", &["ios swift", "swift"]),
        ("scala", &["scala lang", "scala"]),
        ("sql", &["structured query language", "sql"]),
        ("html", &["html5", "html"]),
        ("css", &["css3", "cascading style sheets", "css"]),
        // Frontend
        ("react", &["reactjs", "react.js", "react js", "react18", "react"]),
        ("angular", &["angularjs", "angular.js", "angular2", "angular"]),
        ("vue", &["vuejs", "vue.js", "vue js", "vue3", "vue"]),
        ("svelte", &["sveltejs", "svelte.js", "svelte"]),
        ("nextjs", &["next.js", "next js", "nextjs"]),
        ("nuxt", &["nuxtjs", "nuxt.js", "nuxt"]),
        ("tailwind", &["tailwindcss", "tailwind css", "tailwind"]),
        ("sass", &["scss", "sass"]),
        ("bootstrap", &["bootstrap5", "bootstrap"]),
        ("redux", &["redux toolkit", "redux"]),
        // Backend
        ("nodejs", &["node.js", "node js", "node", "nodejs"]),
        ("express", &["express.js", "expressjs", "express js", "express"]),
        ("nestjs", &["nest.js", "nest js", "nestjs"]),
        ("django", &["django rest framework", "drf", "django"]),
        ("flask", &["python flask", "flask"]),
        ("fastapi", &["fast api", "fastapi"]),
        (
            "spring",
            &["spring boot", "springboot", "spring framework", "spring"],
        ),
        ("rails", &["ruby on rails", "ror", "rails"]),
        ("laravel", &["php laravel", "laravel"]),
        ("graphql", &["graph ql", "graphql"]),
        // Databases and caches
        ("postgresql", &["postgres", "pg", "postgre sql", "postgresql"]),
        ("mysql", &["my sql", "mariadb", "mysql"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("redis", &["redis cache", "redis"]),
        ("elasticsearch", &["elastic search", "opensearch", "elasticsearch"]),
        ("sqlite", &["sqlite3", "sqlite"]),
        ("dynamodb", &["dynamo db", "dynamodb"]),
        // Cloud and DevOps
        ("aws", &["amazon web services", "aws cloud", "aws"]),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure"]),
        ("docker", &["docker compose", "containerization", "docker"]),
        ("kubernetes", &["k8s", "kube", "kubernetes"]),
        ("terraform", &["infrastructure as code", "iac", "terraform"]),
        ("ansible", &["configuration management", "ansible"]),
        ("jenkins", &["jenkins ci", "jenkins"]),
        ("git", &["github", "gitlab", "version control", "git"]),
        (
            "cicd",
            &["ci/cd", "ci cd", "continuous integration", "continuous delivery"],
        ),
        ("linux", &["gnu/linux", "linux"]),
        ("bash", &["shell scripting", "bash"]),
        ("nginx", &["nginx"]),
        // Data and machine learning
        ("pandas", &["python pandas", "pandas"]),
        ("numpy", &["numerical python", "numpy"]),
        ("tensorflow", &["tensor flow", "tensorflow"]),
        ("pytorch", &["torch", "py torch", "pytorch"]),
        ("scikit-learn", &["scikit learn", "sklearn", "scikit-learn"]),
        ("spark", &["apache spark", "pyspark", "spark"]),
        ("kafka", &["apache kafka", "kafka"]),
        ("airflow", &["apache airflow", "airflow"]),
        ("machine learning", &["ml", "machinelearning", "machine learning"]),
        ("deep learning", &["neural networks", "deeplearning", "deep learning"]),
        ("tableau", &["tableau"]),
        ("powerbi", &["power bi", "powerbi"]),
        ("excel", &["microsoft excel", "ms excel", "excel"]),
        // Mobile
        ("react native", &["react-native", "reactnative", "rn", "react native"]),
        ("flutter", &["dart flutter", "flutter"]),
        ("android", &["android sdk", "android"]),
        ("ios", &["ios sdk", "ios"]),
        // Testing
        ("jest", &["jest framework", "jest"]),
        ("cypress", &["cypress.io", "cypress"]),
        ("selenium", &["selenium webdriver", "selenium"]),
        ("junit", &["junit5", "junit"]),
        ("pytest", &["py test", "pytest"]),
        ("playwright", &["playwright"]),
        // Design and delivery
        ("figma", &["figma"]),
        ("photoshop", &["adobe photoshop", "photoshop"]),
        ("illustrator", &["adobe illustrator", "illustrator"]),
        ("jira", &["atlassian jira", "jira"]),
        ("agile", &["agile methodologies", "agile"]),
        ("scrum", &["scrum master", "scrum"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.entry(*canonical).or_insert(*canonical);
        for alias in *alias_list {
            map.entry(*alias).or_insert(*canonical);
        }
    }
    map
});

/// Secondary lookup keyed on separator-stripped aliases, so `react-native`,
/// `node.js` and `ci/cd` resolve without their punctuation.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

fn clean_skill(input: &str) -> String {
    let folded = input.nfkc().collect::<String>().to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn fuzzy_match_canonical(compact: &str) -> Option<&'static str> {
    // Short tokens (java, rust, vue) are only matched exactly; fuzzy lookups
    // on brief inputs produce too many false positives.
    if compact.len() < 5 {
        return None;
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some(*canonical);
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical)
}

fn match_canonical(cleaned: &str) -> Option<&'static str> {
    if cleaned.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(cleaned) {
        return Some(*canonical);
    }

    let compact = compact_key(cleaned);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some(*canonical);
    }

    fuzzy_match_canonical(&compact)
}

/// Normalize a skill name to its canonical spelling.
///
/// Cleaning is NFKC fold, lowercase, trim and whitespace collapse. Names
/// outside the catalog pass through cleaned but otherwise unchanged; the
/// vocabulary is open.
pub fn normalize_skill(skill: &str) -> String {
    let cleaned = clean_skill(skill);
    match match_canonical(&cleaned) {
        Some(canonical) => canonical.to_string(),
        None => cleaned,
    }
}

/// Normalize a skill list into a set.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}

/// Normalize a skill list into a sorted, deduplicated vec.
pub fn normalize_skills_vec(skills: &[String]) -> Vec<String> {
    let mut result: Vec<String> = skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| s.len() >= 2)
        .collect();
    result.sort();
    result.dedup();
    result
}

/// All (alias, canonical) pairs, for the free-text extractor.
pub(crate) fn catalog_aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIAS_TO_CANONICAL.iter().map(|(alias, canonical)| (*alias, *canonical))
}
