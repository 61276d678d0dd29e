//! The built-in use-case table

use super::model::{RoleId, ToolId, UseCase};

use super::model::RoleId::{Faculty, Student};
use super::model::ToolId::{Chatgpt, Copilot, Firefly, Gemini, Zoom};

type Row = (ToolId, RoleId, &'static str, &'static str, &'static [&'static str]);

/// Wrap a short instruction in the shared assistant framing
fn frame_prompt(instruction: &str) -> String {
    format!("You are an expert academic assistant. {instruction} Keep it concise and actionable.")
}

pub(super) fn build() -> Vec<UseCase> {
    ROWS.iter()
        .map(|&(tool, role, title, instruction, tags)| UseCase {
            tool,
            role,
            title: title.to_string(),
            prompt: frame_prompt(instruction),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            details: None,
        })
        .collect()
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    (Chatgpt, Student, "Thesis Builder", "Given my topic, propose 3 clear thesis statements with pros/cons.", &["writing", "planning"]),
    (Chatgpt, Student, "Paper Summarizer", "Summarize this paper into key claims, evidence, and 3 open questions.", &["research"]),
    (Chatgpt, Student, "Study Plan Coach", "Create a 2-week study plan for [course] with daily goals and checkpoints.", &["planning"]),
    (Chatgpt, Student, "Code Explainer", "Explain this code like I am 15 and suggest clearer variable names.", &["coding"]),
    (Chatgpt, Student, "Flashcard Generator", "Turn these notes into 20 active-recall flashcards with answers.", &["memory"]),
    (Chatgpt, Student, "Project Ideas", "Brainstorm 5 project ideas for [course topic] with scope and datasets.", &["ideation"]),
    (Chatgpt, Student, "Email Polisher", "Rewrite this email to a professor: concise, respectful, specific ask.", &["communication"]),
    (Chatgpt, Student, "Essay Outline", "Outline a 1500-word essay with sections, key sources, and transitions.", &["writing"]),
    (Chatgpt, Student, "Mock Interview", "Ask me 8 questions for a [role] interview and give feedback after.", &["career"]),
    (Chatgpt, Student, "Step-by-step Math", "Solve this problem step-by-step, showing the reasoning and final answer.", &["math"]),
    (Chatgpt, Faculty, "Rubric Designer", "Draft a rubric for a 100-point assignment with criteria and levels.", &["teaching"]),
    (Chatgpt, Faculty, "Syllabus Outline", "Create a 15-week syllabus skeleton for [course], weekly topics + outcomes.", &["planning"]),
    (Chatgpt, Faculty, "Question Bank", "Generate 15 quiz questions across Bloom levels for [topic], with keys.", &["assessment"]),
    (Chatgpt, Faculty, "Submission Summaries", "Summarize 10 student reflections into themes and 3 action items.", &["grading"]),
    (Chatgpt, Faculty, "Feedback Templates", "Create reusable feedback snippets for common writing issues.", &["grading"]),
    (Chatgpt, Faculty, "Office Hours FAQ", "Draft a Q&A cheat-sheet for frequent course questions.", &["ops"]),
    (Chatgpt, Faculty, "Translation Assist", "Translate this announcement to [language] with friendly tone.", &["accessibility"]),
    (Chatgpt, Faculty, "Rec Letter Draft", "Draft a recommendation letter given the bullet points below.", &["admin"]),
    (Chatgpt, Faculty, "Lecture Outline", "Outline a 50-minute lecture on [topic] with examples and demos.", &["teaching"]),
    (Chatgpt, Faculty, "Standards Alignment", "Map course outcomes to ABET-style learning outcomes.", &["accreditation"]),
    (Copilot, Student, "Code Completion", "Suggest idiomatic code for this function and explain the changes.", &["coding"]),
    (Copilot, Student, "Unit Tests", "Generate unit tests for this module using [framework].", &["testing"]),
    (Copilot, Student, "Explain Suggestion", "Explain why this Copilot suggestion is correct or risky.", &["learning"]),
    (Copilot, Student, "Refactor Helper", "Refactor for readability and add comments/docs.", &["clean-code"]),
    (Copilot, Student, "Language X↔Y", "Translate this snippet from Python to C++ with notes.", &["translation"]),
    (Copilot, Student, "Docstrings", "Write docstrings in Google style for these functions.", &["docs"]),
    (Copilot, Student, "Starter App", "Create a minimal CRUD example for [stack].", &["starter"]),
    (Copilot, Student, "SQL Assistant", "Propose an efficient SQL query for this question, then explain.", &["data"]),
    (Copilot, Student, "Bug Fixer", "Given this stack trace, propose fixes and tests.", &["debug"]),
    (Copilot, Student, "Git Messages", "Generate conventional commit messages for these diffs.", &["git"]),
    (Copilot, Faculty, "Starter Assignments", "Create assignment starter code + TODOs for [topic].", &["teaching"]),
    (Copilot, Faculty, "Autograder Scripts", "Draft a simple autograder for test cases with clear errors.", &["assessment"]),
    (Copilot, Faculty, "Legacy Refactor", "Refactor legacy lab code to modern patterns with comments.", &["maintenance"]),
    (Copilot, Faculty, "Exercise Variants", "Create 5 difficulty-graded exercise variants for [concept].", &["teaching"]),
    (Copilot, Faculty, "Peer Review Hints", "Generate code review checklist tailored to this assignment.", &["quality"]),
    (Copilot, Faculty, "Template Library", "Produce reusable code templates with placeholders.", &["reusability"]),
    (Copilot, Faculty, "Pseudocode→Code", "Translate pseudocode to runnable [language] with tests.", &["teaching"]),
    (Copilot, Faculty, "Data Cleanup", "Write a script to normalize CSVs and validate schema.", &["data"]),
    (Copilot, Faculty, "Demo Prototypes", "Spin up a tiny demo app for lecture using [framework].", &["demo"]),
    (Copilot, Faculty, "Docs Pages", "Generate a README and lab handout with steps and screenshots.", &["docs"]),
    (Firefly, Student, "Slide Hero Art", "Generate a clean, license-safe hero image for slides on [topic].", &["visuals"]),
    (Firefly, Student, "Background Removal", "Remove backgrounds and export PNGs for a poster.", &["editing"]),
    (Firefly, Student, "Custom Icons", "Create a simple icon set with 2 colors, SVG export.", &["branding"]),
    (Firefly, Student, "Headshot Cleanup", "Retouch headshot: lighting, crop, subtle color match.", &["photo"]),
    (Firefly, Student, "Poster Template", "Design an academic poster grid with headings and color tokens.", &["layout"]),
    (Firefly, Student, "Infographic", "Turn stats into a 3-panel infographic with captions.", &["visuals"]),
    (Firefly, Student, "Club Social Post", "Create square + story graphics for club announcements.", &["social"]),
    (Firefly, Student, "Style Transfer", "Apply cohesive color style for slides + poster.", &["branding"]),
    (Firefly, Student, "Color Palette", "Propose 3 palettes and show contrast ratios.", &["accessibility"]),
    (Firefly, Student, "Upscale & Denoise", "Upscale low-res diagram for print.", &["quality"]),
    (Firefly, Faculty, "Lecture Visuals", "Create 3 simple diagrams to illustrate [concept].", &["teaching"]),
    (Firefly, Faculty, "Course Banner", "Design a course banner image with readable typography.", &["branding"]),
    (Firefly, Faculty, "Assignment Visuals", "Generate small visuals for assignment PDFs.", &["teaching"]),
    (Firefly, Faculty, "Alt Text Helper", "Suggest alt text for 10 images; keep descriptive.", &["accessibility"]),
    (Firefly, Faculty, "Rubric Icons", "Create tiny rubric icons for criteria categories.", &["assessment"]),
    (Firefly, Faculty, "Brand Consistency", "Apply consistent style across slides and handouts.", &["branding"]),
    (Firefly, Faculty, "Call-for-Posters", "Produce flyer/poster templates for a symposium.", &["ops"]),
    (Firefly, Faculty, "Lab Mockups", "Mock up experimental setup illustrations.", &["visuals"]),
    (Firefly, Faculty, "Quick Thumbnails", "Generate thumbnails for recorded lectures.", &["video"]),
    (Firefly, Faculty, "Print Prep", "Export CMYK, margins/bleeds checklist.", &["production"]),
    (Gemini, Student, "Research Buddy", "Brainstorm angles and key sources on [topic]; cite links to start.", &["research"]),
    (Gemini, Student, "PDF Key Points", "Extract key points and glossary from this PDF.", &["docs"]),
    (Gemini, Student, "Code + Image", "Given this diagram image, write code that implements it.", &["multimodal"]),
    (Gemini, Student, "Slides from Outline", "Turn this outline into slide bullets with speaker notes.", &["slides"]),
    (Gemini, Student, "Data Explorer", "Answer questions about this CSV and propose charts.", &["data"]),
    (Gemini, Student, "Translate", "Translate this draft to [language], keep tone neutral.", &["language"]),
    (Gemini, Student, "Map/Timeline", "Create a study timeline and calendar milestones.", &["planning"]),
    (Gemini, Student, "YouTube Summary", "Summarize this YouTube lecture and key timestamps.", &["video"]),
    (Gemini, Student, "Schedule Helper", "Propose a weekly schedule syncing with Google Calendar.", &["productivity"]),
    (Gemini, Student, "Apps Script", "Draft a Google Apps Script to auto-format a Sheet.", &["automation"]),
    (Gemini, Faculty, "Gmail + Docs Drafts", "Draft a kind announcement email, then a Docs version.", &["comms"]),
    (Gemini, Faculty, "Slides Generator", "Create 10-slide outline with images suggestions.", &["slides"]),
    (Gemini, Faculty, "Sheets Insights", "Analyze survey results in Sheets; give top 5 insights.", &["data"]),
    (Gemini, Faculty, "Rubrics from Standards", "Create rubric aligned with course outcomes.", &["assessment"]),
    (Gemini, Faculty, "Grading Aid", "Suggest feedback buckets and common comments.", &["grading"]),
    (Gemini, Faculty, "Apps Script Automations", "Write Apps Script to move files + rename by pattern.", &["automation"]),
    (Gemini, Faculty, "Docs Summarizer", "Summarize meeting notes and extract action items.", &["ops"]),
    (Gemini, Faculty, "Lesson Plans", "Create a lesson plan aligned to outcomes + activities.", &["teaching"]),
    (Gemini, Faculty, "Citation Seeds", "Propose 10 authoritative sources to investigate.", &["research"]),
    (Gemini, Faculty, "Google Sites Hub", "Draft site structure for a course resource hub.", &["ops"]),
    (Zoom, Student, "Meeting Notes", "Generate concise notes and action items from the recording.", &["notes"]),
    (Zoom, Student, "Ask About Call", "Answer questions I ask about the meeting content.", &["qa"]),
    (Zoom, Student, "Agenda Draft", "Draft a focused agenda for the next study meeting.", &["planning"]),
    (Zoom, Student, "Chapters", "Create chapter markers with titles + timestamps.", &["video"]),
    (Zoom, Student, "Translate Captions", "Translate captions and provide glossary of technical terms.", &["accessibility"]),
    (Zoom, Student, "Follow-up Email", "Draft an email summarizing decisions and next steps.", &["comms"]),
    (Zoom, Student, "Clarify Mid-call", "Real-time clarification questions during lecture.", &["support"]),
    (Zoom, Student, "Chat Summaries", "Summarize the Zoom chat thread by theme.", &["ops"]),
    (Zoom, Student, "Highlights Reel", "Collect highlights with timestamps for revision.", &["study"]),
    (Zoom, Student, "Task Extractor", "Extract tasks with owners and due dates.", &["productivity"]),
    (Zoom, Faculty, "Attendance & Notes", "Summarize attendance trends and key takeaways.", &["ops"]),
    (Zoom, Faculty, "Poll Recaps", "Summarize poll results with quick charts.", &["assessment"]),
    (Zoom, Faculty, "Office Hours Digest", "Produce a digest of student Q&A with links.", &["support"]),
    (Zoom, Faculty, "Lecture Summary", "Create a post-lecture summary for LMS announcement.", &["teaching"]),
    (Zoom, Faculty, "Action Items", "List action items for TAs with owners + dates.", &["ops"]),
    (Zoom, Faculty, "Quiz Seeds", "Suggest quiz questions from the lecture content.", &["assessment"]),
    (Zoom, Faculty, "Accessibility Boost", "Improve captions, terminology, and provide glossary.", &["accessibility"]),
    (Zoom, Faculty, "Stakeholder Brief", "Produce 5-bullet summary for department heads.", &["comms"]),
    (Zoom, Faculty, "Committee Minutes", "Draft minutes with motions and votes.", &["admin"]),
    (Zoom, Faculty, "Clip Generator", "Identify 5 moments to clip as micro-lectures.", &["video"]),
];
