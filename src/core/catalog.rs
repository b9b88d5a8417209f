use crate::domain::Course;

/// The fixed set of offerable courses. Built once at startup and shared
/// read-only; listing order is declaration order and never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The catalog the service ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Course {
                id: "vue-artesao".to_string(),
                title: "Vue.js Artesão de Interfaces".to_string(),
                description: "Aprenda a esculpir interfaces modernas com Vue 3, \
                              roteamento dinâmico e estado global."
                    .to_string(),
                workload_hours: 28,
            },
            Course {
                id: "node-backbone".to_string(),
                title: "Node.js Estrutura de Aço".to_string(),
                description: "Construa APIs sólidas com Express + TypeScript, \
                              aplicando padrões e práticas de mercado."
                    .to_string(),
                workload_hours: 22,
            },
            Course {
                id: "ux-lab".to_string(),
                title: "Laboratório UX/UI".to_string(),
                description: "Experiência prática em design de interfaces, \
                              usabilidade e protótipos que encantam."
                    .to_string(),
                workload_hours: 18,
            },
        ])
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Linear scan; the catalog is small and fixed.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}
