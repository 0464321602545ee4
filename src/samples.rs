//! Canned emails that can be loaded into the form for a quick try

const LEGITIMATE: &str = "Good morning,

Could you put together a short slide deck on the topic I sent over yesterday?
I need it before the client call this afternoon, so the sooner the better.

Thank you,
Kind regards
Priya Natarajan";

const SUSPICIOUS: &str = "Good morning,

The invoice was missing from your previous email. Please reply with the invoice
together with your debit card number, expiry date and CVV so we can process
the refund today.

Thank you,
Kind regards
Priya Natarajan";

const MARKETING: &str = "Register today for our exclusive webinar on how automation and AI agents
shorten time to value for your business!

Join our solutions team for highlights from this year's partner summit, a walk
through the new partner portal content, and an overview of the incentives
available this quarter.

Sessions:
AMER  Sep 12, 08:00 AM PST
APJ   Sep 13, 10:30 AM IST

Questions? Write to partners@example.com.
Thank you for your partnership!
The Partner Program Team";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEmail {
    Legitimate,
    Suspicious,
    Marketing,
}

impl SampleEmail {
    pub const ALL: [SampleEmail; 3] = [Self::Legitimate, Self::Suspicious, Self::Marketing];

    pub fn label(self) -> &'static str {
        match self {
            Self::Legitimate => "Legitimate",
            Self::Suspicious => "Suspicious",
            Self::Marketing => "Marketing",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Legitimate => LEGITIMATE,
            Self::Suspicious => SUSPICIOUS,
            Self::Marketing => MARKETING,
        }
    }
}
