//! Sample students, job descriptions and canned completions shared by tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{CompletionClient, LlmError};
use crate::models::request::{ResumeRequest, StudentInfo};

pub fn student_1() -> StudentInfo {
    StudentInfo {
        name: "Jane Doe".to_string(),
        email: "jane.doe@example.com".to_string(),
        phone: "123-456-7890".to_string(),
        location: String::new(),
        linked_in: String::new(),
        website: String::new(),
        education: "B.S. in Computer Science, XYZ University, Expected 2026".to_string(),
        skills: "Python, JavaScript, HTML/CSS, Git, Teamwork, Public Speaking".to_string(),
        experience: "Intern at TechStart (Summer 2024):\n\
            - Developed a web app using Flask and React\n\
            - Collaborated with a team of 5 developers\n\n\
            Hackathon Participant:\n\
            - Built a language learning chatbot in 24 hours\n\
            - Won 2nd place out of 30 teams"
            .to_string(),
        summary: String::new(),
        job_target: String::new(),
    }
}

pub fn student_2() -> StudentInfo {
    StudentInfo {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "123-456-7890".to_string(),
        location: "Seattle, WA".to_string(),
        linked_in: "linkedin.com/in/johndoe".to_string(),
        website: String::new(),
        education: "B.S. in Computer Engineering, ABC University, Expected 2028".to_string(),
        skills: "Java, SQL, Soldering, MS Office".to_string(),
        experience: "Software Development Intern (Summer 2026):\n\
            - Worked on developing backend APIs and assisted in debugging frontend features\n\n\
            Research Assistant:\n\
            - Assisted in research on machine learning algorithms and data analysis"
            .to_string(),
        summary: "Aspiring backend engineer".to_string(),
        job_target: "Mobile App Developer".to_string(),
    }
}

pub const JOB_CYBERSECURITY: &str = "Google is looking for a Cybersecurity Engineer to help \
    protect our systems, users, and data. You will play a key role in identifying \
    vulnerabilities, responding to threats, and building secure solutions.";

pub const JOB_MOBILE: &str = "Apple is seeking a passionate and skilled Mobile App Developer \
    to join our dynamic team. You will be responsible for designing, developing, and \
    maintaining innovative and high-performance iOS applications.";

pub const JOB_MACHINE_LEARNING: &str = "Microsoft is seeking a talented and motivated AI & \
    Machine Learning Software Engineer to join our team. This role involves developing \
    machine learning models and integrating them into scalable systems.";

pub fn request_1() -> ResumeRequest {
    ResumeRequest {
        student_info: student_1(),
        job_description: JOB_CYBERSECURITY.to_string(),
    }
}

pub fn request_2() -> ResumeRequest {
    ResumeRequest {
        student_info: student_2(),
        job_description: JOB_MOBILE.to_string(),
    }
}

/// The same student as `request_2`, aimed at a different posting.
pub fn request_3() -> ResumeRequest {
    ResumeRequest {
        student_info: student_2(),
        job_description: JOB_MACHINE_LEARNING.to_string(),
    }
}

/// A well-formed profile as the completion service would return it.
pub const PROFILE_JSON: &str = r#"{
  "fullName": "Jane Doe",
  "email": "jane.doe@example.com",
  "phone": "123-456-7890",
  "location": "",
  "linkedIn": "",
  "website": "",
  "summary": "Computer Science student with hands-on web development and rapid prototyping experience.",
  "education": [
    {
      "id": "edu-1",
      "school": "XYZ University",
      "degree": "B.S.",
      "fieldOfStudy": "Computer Science",
      "startDate": "2022-09",
      "endDate": "2026-05",
      "location": "",
      "gpa": "",
      "description": "",
      "current": true
    }
  ],
  "experience": [
    {
      "id": "exp-1",
      "company": "TechStart",
      "jobTitle": "Software Engineering Intern",
      "location": "",
      "startDate": "2024-06",
      "endDate": "2024-08",
      "current": false,
      "description": "",
      "bullets": [
        "Developed a web app using Flask and React",
        "Collaborated with a team of 5 developers"
      ]
    },
    {
      "id": "exp-2",
      "company": "Hackathon",
      "jobTitle": "Participant",
      "startDate": "2024",
      "endDate": "2024",
      "current": false,
      "bullets": [
        "Built a language learning chatbot in 24 hours, placing 2nd of 30 teams"
      ]
    }
  ],
  "skills": [
    { "id": "skill-1", "name": "Python", "category": "Languages", "level": "" },
    { "id": "skill-2", "name": "JavaScript", "category": "Languages" },
    { "id": "skill-3", "name": "Public Speaking", "category": "Soft Skills", "level": null }
  ]
}"#;

pub fn fenced_profile_reply() -> String {
    format!("Here is the resume:\n```json\n{PROFILE_JSON}\n```\n")
}

/// Completion client that answers every call with a canned reply and records
/// the (system, user) pairs it was given.
#[derive(Clone)]
pub struct StubClient {
    reply: Result<String, String>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Arc::default(),
        }
    }

    /// Fails every call the way a rejected upstream request would.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Api {
                status: 429,
                message: message.clone(),
            }),
        }
    }
}
