//! English strings.

pub const ENTRIES: &[(&str, &str)] = &[
    ("doctors.tag", "Our Doctors"),
    ("doctors.title", "Find Your Specialist"),
    ("doctors.subtitle", "Browse through our network of experienced healthcare professionals and book your appointment today"),
    ("doctors.filter.specialty", "Specialty"),
    ("doctors.filter.all", "All Specialties"),
    ("doctors.search.label", "Search"),
    ("doctors.search.placeholder", "Search doctors..."),
    ("doctors.empty.title", "No doctors found"),
    ("doctors.empty.desc", "Try adjusting your filters or search terms"),
    ("doctors.error.title", "Failed to load doctors"),
    ("doctors.error.desc", "Please refresh the page to try again"),
    ("doctor.wait", "min wait"),
    ("doctor.experience", "years"),
    ("doctor.book", "Book Now"),
    ("doctor.profile", "View Profile"),
    ("doctor.reviews", "reviews"),
    ("doctor.no_bio", "No bio available"),
    ("appointments.tag", "Your Health"),
    ("appointments.title", "My Appointments"),
    ("appointments.subtitle", "View and manage your upcoming and past appointments"),
    ("login.welcome", "Welcome back,"),
    ("appointments.upcoming", "Upcoming Appointment"),
    ("appointments.upcoming_desc", "You have an appointment in less than 24 hours"),
    ("appointments.empty.title", "No appointments yet"),
    ("appointments.empty.desc", "Book your first appointment to get started"),
    ("appointments.status.scheduled", "Scheduled"),
    ("appointments.status.completed", "Completed"),
    ("appointments.status.cancelled", "Cancelled"),
    ("appointments.status.rescheduled", "Rescheduled"),
    ("appointments.action.reschedule", "Reschedule"),
    ("appointments.action.cancel", "Cancel"),
    ("appointments.action.review", "Leave Review"),
    ("modal.booking.title", "Book Appointment"),
    ("modal.type.inperson", "In-Person"),
    ("modal.type.inperson.desc", "Clinic visit"),
    ("modal.type.video", "Video Call"),
    ("modal.type.video.desc", "Online consultation"),
    ("modal.type.phone", "Phone"),
    ("modal.type.phone.desc", "Voice call"),
    ("modal.preview.title", "Booking Confirmation Preview"),
    ("modal.preview.desc", "A confirmation email will be sent to your inbox"),
    ("modal.reschedule.title", "Reschedule Appointment"),
    ("modal.reschedule.confirm", "Confirm Reschedule"),
    ("modal.review.title", "Write a Review"),
    ("modal.review.rating", "Rating"),
    ("modal.review.comment", "Comment"),
    ("modal.review.submit", "Submit Review"),
    ("toast.theme.switched", "Switched to {theme} mode"),
    ("toast.favorite.added", "Added to favorites"),
    ("toast.favorite.removed", "Removed from favorites"),
    ("toast.load.error", "Failed to load {item}"),
    ("toast.booking.success", "Appointment booked successfully!"),
    ("toast.cancel.success", "Appointment cancelled successfully"),
    ("toast.reschedule.success", "Appointment rescheduled successfully!"),
    ("toast.review.success", "Review submitted successfully!"),
    ("modal.cancel.confirm", "Are you sure you want to cancel this appointment?"),
    ("appointments.upcoming_desc_doctor", "You have an appointment with {doctor} in"),
    ("minutes", "minutes"),
    ("hours", "hours"),
    ("day.monday", "Monday"),
    ("day.tuesday", "Tuesday"),
    ("day.wednesday", "Wednesday"),
    ("day.thursday", "Thursday"),
    ("day.friday", "Friday"),
    ("day.saturday", "Saturday"),
    ("day.sunday", "Sunday"),
    ("day.short.sun", "Sun"),
    ("day.short.mon", "Mon"),
    ("day.short.tue", "Tue"),
    ("day.short.wed", "Wed"),
    ("day.short.thu", "Thu"),
    ("day.short.fri", "Fri"),
    ("day.short.sat", "Sat"),
    ("month.january", "January"),
    ("month.february", "February"),
    ("month.march", "March"),
    ("month.april", "April"),
    ("month.may", "May"),
    ("month.june", "June"),
    ("month.july", "July"),
    ("month.august", "August"),
    ("month.september", "September"),
    ("month.october", "October"),
    ("month.november", "November"),
    ("month.december", "December"),
    ("modal.review.comment.placeholder", "Share your experience with this doctor..."),
    ("detail.about", "About"),
    ("detail.experience", "Experience"),
    ("detail.wait", "Wait Time"),
    ("detail.phone", "Phone"),
    ("detail.availability", "Availability"),
    ("detail.reviews", "Patient Reviews"),
    ("detail.reviews.empty", "No reviews yet."),
    ("detail.unavailable", "Not Available"),
    ("slots.select", "Select time"),
    ("slots.loading", "Loading..."),
    ("slots.empty", "No available slots for this date"),
    ("slots.error", "Failed to load time slots"),
    ("slots.pick_date", "Select a date to view available times"),
    ("favorites.signin", "Please sign in to manage favorites"),
    ("favorites.empty", "No favorite doctors yet"),
    ("login.signed_in", "Signed in as {email}"),
    ("login.signed_out", "Signed out successfully"),
    ("toast.language.switched", "Language set to {language}"),
    ("booking.summary.patient", "Patient"),
    ("booking.summary.doctor", "Doctor"),
    ("booking.summary.date", "Date"),
    ("booking.summary.time", "Time"),
    ("booking.summary.type", "Consultation Type"),
];
