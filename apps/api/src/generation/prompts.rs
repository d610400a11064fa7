// All LLM prompt constants for the three artifact generators.
// Reuses cross-cutting fragments from llm_client::prompts.

pub const RESUME_SYSTEM: &str = "You are a professional resume generator.";
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter generator.";
pub const ADVICE_SYSTEM: &str = "You are a professional resume advice generator.";

/// Shape the resume reply must match exactly. Embedded verbatim in the resume prompt.
pub const RESUME_INTERFACE: &str = r#"interface ResumeProfile {
  fullName: string;
  email: string;
  phone: string;
  location: string;
  linkedIn: string;      // "" if not provided
  website: string;       // "" if not provided
  summary: string;
  education: EducationItem[];
  experience: ExperienceItem[];
  skills: SkillItem[];
}

interface EducationItem {
  id: string;            // new unique identifier
  school: string;
  degree: string;
  fieldOfStudy: string;
  startDate: string;
  endDate: string;
  location: string;      // "" if unknown
  gpa: string;           // "" if unknown
  description: string;   // "" if none
  current: boolean;
}

interface ExperienceItem {
  id: string;            // new unique identifier
  company: string;
  jobTitle: string;
  location: string;      // "" if unknown
  startDate: string;
  endDate: string;
  current: boolean;
  description: string;   // "" if none
  bullets: string[];
}

interface SkillItem {
  id: string;            // new unique identifier
  name: string;
  category: string;
  level: string;         // "" if unknown
}"#;

/// Resume prompt template.
/// Replace: {grounding_instruction}, {impact_instruction}, {json_only_instruction},
///          {interface}, {name}, {email}, {phone}, {location}, {linkedin}, {website},
///          {summary}, {job_target}, {education}, {skills}, {experience}, {job_description}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Create a professional, one-page resume for a student based on the following input:

Name: {name}
Email: {email}
Phone: {phone}
Location: {location}
LinkedIn: {linkedin}
Website: {website}
Summary: {summary}
Target Role: {job_target}

Education:
{education}

Skills:
{skills}

Experience:
{experience}

Job Description:
{job_description}

Return the resume as JSON matching this TypeScript interface EXACTLY (same field names, same types, same nesting):

{interface}

HARD RULES:
1. {json_only_instruction}
2. Every education, experience, and skill item MUST have a freshly assigned, unique, non-empty "id" string.
3. {grounding_instruction}
4. {impact_instruction}
5. Tailor the summary, bullets, and skill ordering to the job description, referencing specific skills and experiences relevant to the job."#;

/// Cover letter prompt template.
/// Replace: {grounding_instruction}, {impact_instruction}, {name}, {email}, {phone},
///          {education}, {skills}, {experience}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert cover letter writer. Create a professional, one-page cover letter for a student based on the following input:

Name: {name}
Email: {email}
Phone: {phone}

Education:
{education}

Skills:
{skills}

Experience:
{experience}

Job Description:
{job_description}

{grounding_instruction}
{impact_instruction}
Tailor the cover letter to the given job description, referencing specific skills and experiences relevant to the job."#;

/// Advice prompt template.
/// Replace: {name}, {email}, {phone}, {education}, {skills}, {experience}, {job_description}
pub const ADVICE_PROMPT_TEMPLATE: &str = r#"You are an expert career adviser and resume reviewer. Review a student's resume based on the following input:

Name: {name}
Email: {email}
Phone: {phone}

Education:
{education}

Skills:
{skills}

Experience:
{experience}

Job Description:
{job_description}

Make an "Advice" section that provides suggestions on how the student can improve the resume in a clear, concise, bullet-point form.
Base every suggestion on the information above; do not assume experience the student has not listed.
Tailor the suggestions to the given job description, referencing specific skills and experiences relevant to the job."#;
