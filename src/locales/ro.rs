//! Romanian strings.

pub const ENTRIES: &[(&str, &str)] = &[
    ("doctors.tag", "Doctorii Noștri"),
    ("doctors.title", "Găsește Specialistul Tău"),
    ("doctors.subtitle", "Răsfoiește rețeaua noastră de profesioniști în sănătate și fă-ți o programare astăzi"),
    ("doctors.filter.specialty", "Specialitate"),
    ("doctors.filter.all", "Toate Specialitățile"),
    ("doctors.search.label", "Căutare"),
    ("doctors.search.placeholder", "Caută doctori..."),
    ("doctors.empty.title", "Niciun doctor găsit"),
    ("doctors.empty.desc", "Încearcă să ajustezi filtrele sau termenii de căutare"),
    ("doctors.error.title", "Nu s-au putut încărca doctorii"),
    ("doctors.error.desc", "Te rugăm să reîncarci pagina pentru a încerca din nou"),
    ("doctor.wait", "min timp așteptare"),
    ("doctor.experience", "ani"),
    ("doctor.book", "Rezervă Acum"),
    ("doctor.profile", "Vezi Profil"),
    ("doctor.reviews", "recenzii"),
    ("doctor.no_bio", "Fără biografie disponibilă"),
    ("appointments.tag", "Sănătatea Ta"),
    ("appointments.title", "Programările Mele"),
    ("appointments.subtitle", "Vezi și gestionează programările viitoare și trecute"),
    ("login.welcome", "Bine ai revenit,"),
    ("appointments.upcoming", "Programare Viitoare"),
    ("appointments.upcoming_desc", "Ai o programare în mai puțin de 24 de ore"),
    ("appointments.empty.title", "Nicio programare încă"),
    ("appointments.empty.desc", "Fă prima ta programare pentru a începe"),
    ("appointments.status.scheduled", "Programat"),
    ("appointments.status.completed", "Finalizat"),
    ("appointments.status.cancelled", "Anulat"),
    ("appointments.status.rescheduled", "Reprogramat"),
    ("appointments.action.reschedule", "Reprogramează"),
    ("appointments.action.cancel", "Anulează"),
    ("appointments.action.review", "Lasă Recenzie"),
    ("modal.booking.title", "Fă o Programare"),
    ("modal.type.inperson", "Fizic"),
    ("modal.type.inperson.desc", "Vizită la clinică"),
    ("modal.type.video", "Apel Video"),
    ("modal.type.video.desc", "Consultație online"),
    ("modal.type.phone", "Telefon"),
    ("modal.type.phone.desc", "Apel voce"),
    ("modal.preview.title", "Previzualizare Confirmare"),
    ("modal.preview.desc", "Un email de confirmare va fi trimis în inbox-ul tău"),
    ("modal.reschedule.title", "Reprogramează"),
    ("modal.reschedule.confirm", "Confirmă Reprogramarea"),
    ("modal.review.title", "Scrie o Recenzie"),
    ("modal.review.rating", "Rating"),
    ("modal.review.comment", "Comentariu"),
    ("modal.review.submit", "Trimite Recenzie"),
    ("toast.theme.switched", "Schimbat la modul {theme}"),
    ("toast.favorite.added", "Adăugat la favorite"),
    ("toast.favorite.removed", "Eliminat de la favorite"),
    ("toast.load.error", "Eșec la încărcarea {item}"),
    ("toast.booking.success", "Programare realizată cu succes!"),
    ("toast.cancel.success", "Programare anulată cu succes"),
    ("toast.reschedule.success", "Programare reprogramată cu succes!"),
    ("toast.review.success", "Recenzie trimisă cu succes!"),
    ("modal.cancel.confirm", "Ești sigur că vrei să anulezi această programare?"),
    ("appointments.upcoming_desc_doctor", "Ai o programare cu {doctor} în"),
    ("minutes", "minute"),
    ("hours", "ore"),
    ("day.monday", "Luni"),
    ("day.tuesday", "Marți"),
    ("day.wednesday", "Miercuri"),
    ("day.thursday", "Joi"),
    ("day.friday", "Vineri"),
    ("day.saturday", "Sâmbătă"),
    ("day.sunday", "Duminică"),
    ("day.short.sun", "Dum"),
    ("day.short.mon", "Lun"),
    ("day.short.tue", "Mar"),
    ("day.short.wed", "Mie"),
    ("day.short.thu", "Joi"),
    ("day.short.fri", "Vin"),
    ("day.short.sat", "Sâm"),
    ("month.january", "Ianuarie"),
    ("month.february", "Februarie"),
    ("month.march", "Martie"),
    ("month.april", "Aprilie"),
    ("month.may", "Mai"),
    ("month.june", "Iunie"),
    ("month.july", "Iulie"),
    ("month.august", "August"),
    ("month.september", "Septembrie"),
    ("month.october", "Octombrie"),
    ("month.november", "Noiembrie"),
    ("month.december", "Decembrie"),
    ("modal.review.comment.placeholder", "Împărtășește experiența ta cu acest doctor..."),
    ("detail.about", "Despre"),
    ("detail.experience", "Experiență"),
    ("detail.wait", "Timp Așteptare"),
    ("detail.phone", "Telefon"),
    ("detail.availability", "Disponibilitate"),
    ("detail.reviews", "Recenzii Pacienți"),
    ("detail.reviews.empty", "Nicio recenzie încă."),
    ("detail.unavailable", "Indisponibil"),
    ("slots.select", "Selectează ora"),
    ("slots.loading", "Se încarcă..."),
    ("slots.empty", "Niciun interval disponibil pentru această dată"),
    ("slots.error", "Nu s-au putut încărca intervalele orare"),
    ("slots.pick_date", "Selectează o dată pentru a vedea orele disponibile"),
    ("favorites.signin", "Autentifică-te pentru a gestiona favoritele"),
    ("favorites.empty", "Niciun doctor favorit încă"),
    ("login.signed_in", "Autentificat ca {email}"),
    ("login.signed_out", "Deconectat cu succes"),
    ("toast.language.switched", "Limba setată la {language}"),
    ("booking.summary.patient", "Pacient"),
    ("booking.summary.doctor", "Doctor"),
    ("booking.summary.date", "Data"),
    ("booking.summary.time", "Ora"),
    ("booking.summary.type", "Tip Consultație"),
];
