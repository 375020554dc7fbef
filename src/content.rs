//! Static page content
//!
//! Everything on the page except the contact form is fixed at compile time.

/// Name shown in the page header
pub const OWNER: &str = "Carlos Derico";

/// Tagline shown under the name
pub const TAGLINE: &str = "Cybersecurity | Python Automation | AI Engineering";

/// Resume link target. Placeholder until a hosted copy exists; the config
/// file can override it.
pub const RESUME_URL: &str = "#";

/// A single service card
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

/// The three service cards, in display order
pub const SERVICES: [Service; 3] = [
    Service {
        title: "XSER™",
        description:
            "Exploit Surface Exposure Rating for real-world risk auditing. Ask for your XSER today.",
    },
    Service {
        title: "AI-Driven Security",
        description:
            "Prompt engineering, intelligent automation, GPT-based SOC tooling, threat detection, & more.",
    },
    Service {
        title: "Script Arsenal",
        description:
            "Custom Python tools for brute-force detection, log parsing, automation, red/blue ops, and backend APIs.",
    },
];

/// Tech stack bullet points, rendered in this exact order
pub const TECH_STACK: [&str; 5] = [
    "Python (Flask, FastAPI, Requests, Pandas)",
    "Cybersec (SIEM, Nmap, Burp, Metasploit, Nessus, Splunk, Wireshark)",
    "Cloud: AWS, Azure (IAM, Security Groups, Lambda, Defender)",
    "AI Tools: LangChain, OpenAI API, Prompt Engineering, RAG pipelines",
    "Languages: Python, Bash, JavaScript (Node), YAML, JSON, SQL",
];

/// Footer line
pub const FOOTER: &str = "© 2025 Carlos Derico. XSER™ is a proprietary concept by Carlos Derico.";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tech_stack_has_exactly_five_entries() {
        assert_eq!(TECH_STACK.len(), 5);
    }

    #[test]
    fn test_tech_stack_order_is_fixed() {
        assert!(TECH_STACK[0].starts_with("Python"));
        assert!(TECH_STACK[1].starts_with("Cybersec"));
        assert!(TECH_STACK[2].starts_with("Cloud"));
        assert!(TECH_STACK[3].starts_with("AI Tools"));
        assert!(TECH_STACK[4].starts_with("Languages"));
    }

    #[test]
    fn test_three_service_cards_in_order() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(SERVICES[0].title, "XSER™");
        assert_eq!(SERVICES[1].title, "AI-Driven Security");
        assert_eq!(SERVICES[2].title, "Script Arsenal");
    }

    #[test]
    fn test_header_and_footer_constants() {
        assert_eq!(OWNER, "Carlos Derico");
        assert!(!TAGLINE.is_empty());
        assert!(FOOTER.contains(OWNER));
        assert_eq!(RESUME_URL, "#");
    }

    #[test]
    fn test_no_empty_content() {
        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
        }
        for entry in &TECH_STACK {
            assert!(!entry.is_empty());
        }
    }
}
