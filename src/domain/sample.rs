use crate::domain::model::{Presentation, Project, ProjectCategory, ProjectId, ProjectLinks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub bio: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "Muhammad Salman",
        title: "Computer Science Student & Front-End Developer",
        location: "Nowshera, KPK, Pakistan",
        email: "salmanbutt0123sraja@gmail.com",
        linkedin: "https://www.linkedin.com/in/salman-butt-0a1a26316",
        bio: "Self-driven front-end designer and computer science student, \
              currently exploring Python for data science and machine learning.",
    }
}

fn sample_project(
    id: u64,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: ProjectCategory,
    color: &str,
) -> Project {
    Project {
        id: ProjectId::Number(id),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        category,
        links: ProjectLinks::default(),
        presentation: Presentation::new(
            format!("bg-{}-100", color),
            format!("text-{}-900", color),
        ),
        featured: false,
        created_at: None,
        updated_at: None,
    }
}

/// 遠端清單為空或讀取失敗時顯示的內建專案
pub fn fallback_projects() -> Vec<Project> {
    vec![
        sample_project(
            1,
            "Responsive Portfolio Websites",
            "Built multiple responsive portfolio websites using semantic HTML and modern CSS, \
             focusing on clean layouts and user experience.",
            &["HTML", "CSS", "Responsive Design"],
            ProjectCategory::WebDevelopment,
            "blue",
        ),
        sample_project(
            2,
            "Python Calculator & Quiz Apps",
            "Developed interactive applications including calculators and quiz systems \
             using Python fundamentals and logic building.",
            &["Python", "Logic Building", "User Input"],
            ProjectCategory::Programming,
            "green",
        ),
        sample_project(
            3,
            "Data Analysis Projects",
            "Exploring data analysis using Pandas and NumPy, working on real-world datasets \
             to extract meaningful insights.",
            &["Python", "Pandas", "NumPy", "Data Analysis"],
            ProjectCategory::DataScience,
            "purple",
        ),
        sample_project(
            4,
            "SQL Database Projects",
            "Practiced database operations with SQL including SELECT, INSERT, WHERE clauses \
             and basic query optimization.",
            &["SQL", "Database Design", "Query Optimization"],
            ProjectCategory::Database,
            "orange",
        ),
    ]
}
