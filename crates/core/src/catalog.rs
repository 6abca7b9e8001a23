//! The immutable course catalog and its category filter.

use std::fmt;
use thiserror::Error;

use crate::model::{Course, CourseId, Lesson};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate course id: {0}")]
    DuplicateCourseId(CourseId),
}

/// Category selection for catalog views: everything, or one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// The display label ("All" for the sentinel).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => course.category() == name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of offered courses, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate course ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCourseId` when two courses collide.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        for course in &courses {
            if !seen.insert(course.id().clone()) {
                return Err(CatalogError::DuplicateCourseId(course.id().clone()));
            }
        }
        Ok(Self { courses })
    }

    /// All courses in declared order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by id.
    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    /// Distinct category labels in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for course in &self.courses {
            if !labels.iter().any(|label| label == course.category()) {
                labels.push(course.category().to_owned());
            }
        }
        labels
    }

    /// Filter options for the catalog view: "All" followed by each category.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(self.categories().into_iter().map(CategoryFilter::Category));
        options
    }

    /// Courses matching the filter, preserving catalog order.
    ///
    /// A category with no matching course yields an empty list, not an error.
    #[must_use]
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| filter.matches(course))
            .collect()
    }

    /// Total number of lessons across every course.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.courses.iter().map(Course::lesson_count).sum()
    }

    /// The built-in course data the app ships with.
    ///
    /// Uniqueness and non-emptiness of the seed data are asserted by the
    /// tests below, so startup skips revalidation.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            courses: builtin_courses(),
        }
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_courses() -> Vec<Course> {
    vec![
        Course::from_parts(
            "web-dev-101",
            "Web Development 101",
            "Learn the fundamentals of HTML, CSS, and JavaScript.",
            "Web Development",
            vec![
                Lesson::from_parts(
                    "html-intro",
                    "Introduction to HTML",
                    "HTML (HyperText Markup Language) is the most basic building block \
                     of the Web. It defines the meaning and structure of web content. \
                     Other technologies besides HTML are generally used to describe a \
                     web page's appearance (CSS) or behavior (JavaScript).",
                ),
                Lesson::from_parts(
                    "css-basics",
                    "CSS Fundamentals",
                    "Cascading Style Sheets (CSS) is a style sheet language used for \
                     describing the presentation of a document written in a markup \
                     language such as HTML. CSS is a cornerstone technology of the Web, \
                     alongside HTML and JavaScript.",
                ),
                Lesson::from_parts(
                    "js-dom",
                    "JavaScript and the DOM",
                    "JavaScript is a scripting language that enables you to create \
                     dynamically updating content, control multimedia, and much more. \
                     The DOM (Document Object Model) is a programming interface for web \
                     documents.",
                ),
                Lesson::from_parts(
                    "forms",
                    "Building Forms",
                    "HTML forms are used to collect user input. The input is most often \
                     sent to a server for processing. Forms are a critical part of web \
                     applications for user interaction.",
                ),
                Lesson::from_parts(
                    "flexbox",
                    "Flexbox and Responsive Design",
                    "Flexbox is a one-dimensional layout method for arranging items in \
                     rows or columns. Items flex to fill extra space or shrink to \
                     prevent overflow. It is perfect for building responsive designs.",
                ),
            ],
        ),
        Course::from_parts(
            "react-from-scratch",
            "React from Scratch",
            "Master modern React with hooks, context, and more.",
            "Web Development",
            vec![
                Lesson::from_parts(
                    "react-intro",
                    "Getting Started with React",
                    "React is a free and open-source front-end JavaScript library for \
                     building user interfaces based on components.",
                ),
                Lesson::from_parts(
                    "components",
                    "Functional Components",
                    "Functional components are plain functions that return markup. They \
                     are the standard way to build components in modern React.",
                ),
                Lesson::from_parts(
                    "state-hooks",
                    "State and Hooks",
                    "Hooks are functions that let you hook into React state and \
                     lifecycle features from functional components.",
                ),
                Lesson::from_parts(
                    "context-api",
                    "Using the Context API",
                    "Context provides a way to pass data through the component tree \
                     without passing props down manually at every level.",
                ),
            ],
        ),
        Course::from_parts(
            "advanced-typescript",
            "Advanced TypeScript",
            "Level up your type-system skills with generics and advanced patterns.",
            "Programming",
            vec![
                Lesson::from_parts(
                    "types",
                    "Types",
                    "TypeScript's structural type system describes the shapes values \
                     can take, catching whole classes of bugs at compile time.",
                ),
                Lesson::from_parts(
                    "generics",
                    "Generics",
                    "Generics let you write components that work over a variety of \
                     types rather than a single one, while keeping type safety.",
                ),
                Lesson::from_parts(
                    "interfaces",
                    "Interfaces",
                    "Interfaces name object shapes and contracts. They can be extended, \
                     merged, and implemented by classes.",
                ),
                Lesson::from_parts(
                    "advanced-patterns",
                    "Advanced Patterns",
                    "Conditional types, mapped types, and template literal types enable \
                     expressive, reusable type-level programming.",
                ),
            ],
        ),
        Course::from_parts(
            "tailwind-css",
            "Mastering Tailwind CSS",
            "Go from zero to hero with Tailwind CSS.",
            "Design",
            vec![
                Lesson::from_parts(
                    "tailwind-intro",
                    "Introduction to Tailwind",
                    "Tailwind CSS is a utility-first CSS framework for rapidly building \
                     custom user interfaces from low-level utility classes.",
                ),
                Lesson::from_parts(
                    "layout",
                    "Layout and Spacing",
                    "Tailwind's layout utilities provide a straightforward way to \
                     control the layout and spacing of elements in your design.",
                ),
                Lesson::from_parts(
                    "tailwind-components",
                    "Building Components",
                    "Tailwind encourages a utility-first workflow where reusable \
                     components are composed from utility classes in the markup.",
                ),
            ],
        ),
    ]
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
