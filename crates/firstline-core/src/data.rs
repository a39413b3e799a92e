use crate::topic::FirstAidTopic;

fn topic(
    id: &str,
    title: &str,
    description: &str,
    steps: &[&str],
    dos: &[&str],
    donts: &[&str],
    source: &str,
    keywords: &[&str],
) -> FirstAidTopic {
    FirstAidTopic {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        steps: steps.iter().map(|s| (*s).to_string()).collect(),
        dos: dos.iter().map(|s| (*s).to_string()).collect(),
        donts: donts.iter().map(|s| (*s).to_string()).collect(),
        source: source.to_string(),
        keywords: keywords.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Builtin knowledge base, in display order. Keywords are lowercase by
/// construction; `KnowledgeBase::new` re-checks that invariant.
pub(crate) fn builtin_topics() -> Vec<FirstAidTopic> {
    vec![
        topic(
            "cpr",
            "CPR",
            "Cardiopulmonary resuscitation for an unresponsive person who is not breathing normally.",
            &[
                "Check the scene is safe, then check responsiveness by tapping the shoulders and shouting.",
                "Call the local emergency number, or ask a bystander to call and to fetch an AED.",
                "Place the heel of one hand on the center of the chest, the other hand on top.",
                "Push hard and fast: compressions at least 5 cm deep at 100 to 120 per minute.",
                "After 30 compressions give 2 rescue breaths if trained, then continue cycles of 30:2.",
                "Use the AED as soon as it arrives and follow its voice prompts.",
                "Continue until the person shows signs of life or professional help takes over.",
            ],
            &[
                "Let the chest fully recoil between compressions.",
                "Swap rescuers every 2 minutes if possible to avoid fatigue.",
                "Keep going even if you hear ribs crack; interrupted compressions are worse.",
            ],
            &[
                "Do not delay compressions to search for a pulse.",
                "Do not give breaths if unwilling or untrained; hands-only CPR still helps.",
                "Do not leave the person alone to look for help if a bystander can go.",
            ],
            "American Heart Association, Basic Life Support guidelines",
            &["cpr", "cardiac arrest", "heart stopped", "not breathing", "resuscitation", "compressions", "aed"],
        ),
        topic(
            "choking",
            "Choking",
            "A blocked airway caused by food or an object; the person cannot breathe, cough, or speak.",
            &[
                "Ask \"Are you choking?\" If they can cough or speak, encourage them to keep coughing.",
                "If the airway is fully blocked, give up to 5 sharp back blows between the shoulder blades.",
                "If back blows fail, give up to 5 abdominal thrusts just above the navel.",
                "Alternate 5 back blows with 5 abdominal thrusts until the object clears.",
                "If the person becomes unresponsive, lower them to the ground and start CPR.",
            ],
            &[
                "Support the chest with one hand while giving back blows.",
                "Call emergency services if the obstruction does not clear quickly.",
                "Have anyone who received abdominal thrusts checked by a doctor afterwards.",
            ],
            &[
                "Do not perform blind finger sweeps of the mouth.",
                "Do not give abdominal thrusts to infants under one year.",
                "Do not slap the back of someone who is coughing effectively.",
            ],
            "St John Ambulance, choking first aid",
            &["choking", "heimlich", "airway obstruction", "cant breathe", "swallowed object"],
        ),
        topic(
            "severe-bleeding",
            "Severe Bleeding",
            "Heavy external bleeding from a wound that does not stop on its own.",
            &[
                "Put pressure on the wound with whatever is available to stop or slow the flow of blood.",
                "Call the local emergency number immediately.",
                "Apply a clean dressing and press firmly with the palm of your hand.",
                "Add more layers on top if blood soaks through; do not remove the soaked dressing.",
                "Keep the injured part raised above the level of the heart if possible.",
                "Treat for shock: lie the person down and keep them warm until help arrives.",
            ],
            &[
                "Wear gloves or use a plastic bag as a barrier if available.",
                "Keep the person still and reassure them.",
                "Note the time pressure was applied for the emergency crew.",
            ],
            &[
                "Do not remove an embedded object; pad around it instead.",
                "Do not use a tourniquet unless bleeding is life threatening and cannot be controlled.",
                "Do not give the person food or drink.",
            ],
            "British Red Cross, bleeding first aid",
            &["bleeding", "blood loss", "wound", "hemorrhage", "cut", "laceration", "deep cut"],
        ),
        topic(
            "burns",
            "Burns and Scalds",
            "Skin damage from heat, hot liquids, chemicals, or electricity.",
            &[
                "Remove the person from the source of the burn safely.",
                "Cool the burn under cool running water for at least 20 minutes.",
                "Remove jewellery and loose clothing near the burn before swelling starts.",
                "Cover the burn loosely with cling film or a clean non-fluffy dressing.",
                "Seek medical help for burns that are large, deep, or on the face, hands, or joints.",
            ],
            &[
                "Keep the person warm while cooling the burn itself.",
                "Give paracetamol or ibuprofen for pain if appropriate.",
                "Treat chemical burns with continuous water irrigation and call poison control.",
            ],
            &[
                "Do not apply ice, butter, toothpaste, or creams to a fresh burn.",
                "Do not burst blisters.",
                "Do not peel off clothing stuck to the burn.",
            ],
            "NHS, burns and scalds guidance",
            &["burn", "scald", "fire", "hot water", "chemical burn", "sunburn", "blister"],
        ),
        topic(
            "fracture",
            "Fractures and Broken Bones",
            "A suspected broken bone after a fall, blow, or twisting injury.",
            &[
                "Keep the injured limb still; do not try to straighten it.",
                "Support the injury with a sling, splint, or padding in the position found.",
                "Apply a cold pack wrapped in cloth to reduce swelling and pain.",
                "Call emergency services for suspected fractures of the head, neck, back, hip, or thigh.",
                "Monitor for shock while waiting for help.",
            ],
            &[
                "Check circulation beyond the injury: color, warmth, and feeling.",
                "Immobilize the joints above and below the suspected break.",
                "Remove rings and watches before swelling begins.",
            ],
            &[
                "Do not move the person unless they are in danger.",
                "Do not push on a protruding bone or try to push it back in.",
                "Do not let the person eat or drink in case surgery is needed.",
            ],
            "Mayo Clinic, fractures first aid",
            &["fracture", "broken bone", "broken arm", "broken leg", "sprain", "dislocation", "splint"],
        ),
        topic(
            "snakebite",
            "Snakebite",
            "A bite from a snake that may be venomous; treat every bite as an emergency.",
            &[
                "Move the person away from the snake and keep them calm and still.",
                "Call the local emergency number right away.",
                "Remove tight clothing and jewellery near the bite before swelling starts.",
                "Keep the bitten limb immobilized and at or slightly below heart level.",
                "Clean the wound gently and cover it with a clean, dry dressing.",
                "Mark the edge of the swelling on the skin and note the time of the bite.",
            ],
            &[
                "Note the snake's color and shape to describe to responders.",
                "Keep the person from walking if at all possible.",
                "Monitor breathing and be ready to start CPR.",
            ],
            &[
                "Do not cut the wound or try to suck out venom.",
                "Do not apply a tourniquet or ice to the bite.",
                "Do not give the person alcohol or caffeine.",
                "Do not try to capture or kill the snake.",
            ],
            "World Health Organization, snakebite envenoming",
            &["snake", "snakebite", "venom", "viper", "cobra", "bite"],
        ),
        topic(
            "heatstroke",
            "Heatstroke",
            "Dangerously high body temperature after heat exposure or exertion; the person may be confused or unconscious.",
            &[
                "Move the person to a cool, shaded place and call emergency services.",
                "Remove excess clothing.",
                "Cool them rapidly: cold water immersion if possible, otherwise wet cloths and fanning.",
                "Place cold packs at the neck, armpits, and groin.",
                "If they are fully alert, give small sips of cool water.",
            ],
            &[
                "Keep cooling until their temperature drops or help arrives.",
                "Stay with the person and monitor their level of consciousness.",
            ],
            &[
                "Do not give fluids to a drowsy or unconscious person.",
                "Do not give fever medicine such as aspirin or paracetamol; it does not help heatstroke.",
            ],
            "CDC, heat stress and heat illness",
            &["heatstroke", "heat exhaustion", "overheating", "sun", "dehydration", "high temperature"],
        ),
        topic(
            "hypothermia",
            "Hypothermia",
            "Body temperature dropping below 35°C after cold exposure; shivering, slurred speech, drowsiness.",
            &[
                "Move the person out of the cold and remove wet clothing.",
                "Warm them gradually with blankets, dry layers, and skin-to-skin contact if needed.",
                "Cover the head and neck; insulate them from the cold ground.",
                "Give warm, sweet, non-alcoholic drinks if they are fully alert.",
                "Call emergency services for severe symptoms: confusion, weak pulse, or loss of consciousness.",
            ],
            &[
                "Handle the person gently; rough movement can trigger cardiac arrest.",
                "Keep them lying down once sheltered.",
            ],
            &[
                "Do not use hot water, heating pads, or direct heat on the skin.",
                "Do not rub or massage the limbs.",
                "Do not give alcohol.",
            ],
            "Mayo Clinic, hypothermia first aid",
            &["hypothermia", "cold exposure", "freezing", "frostbite", "shivering", "low temperature"],
        ),
        topic(
            "poisoning",
            "Poisoning",
            "Swallowed, inhaled, or absorbed poison, including medicines, chemicals, and food toxins.",
            &[
                "Find out what was taken, how much, and when, if you can do so quickly.",
                "Call poison control or the local emergency number for instructions.",
                "If the poison was inhaled, get the person to fresh air.",
                "If poison is on the skin, remove contaminated clothing and rinse the skin for 15 to 20 minutes.",
                "If the person is unresponsive and not breathing normally, start CPR.",
                "Keep the container or label to show responders.",
            ],
            &[
                "Place an unconscious breathing person in the recovery position.",
                "Follow the dispatcher's instructions exactly.",
            ],
            &[
                "Do not induce vomiting unless told to by poison control.",
                "Do not give anything to eat or drink unless instructed.",
                "Do not use syrup of ipecac.",
            ],
            "American Association of Poison Control Centers",
            &["poison", "poisoning", "overdose", "swallowed chemical", "food poisoning", "toxin"],
        ),
        topic(
            "seizure",
            "Seizures",
            "Uncontrolled shaking or convulsions; most seizures stop on their own within a few minutes.",
            &[
                "Stay calm, note the time the seizure starts, and stay with the person.",
                "Clear hard or sharp objects away and cushion their head.",
                "Loosen anything tight around the neck.",
                "When the shaking stops, roll them onto their side into the recovery position.",
                "Call emergency services if the seizure lasts over 5 minutes, repeats, or is their first.",
            ],
            &[
                "Time the seizure from start to finish.",
                "Stay until the person is fully awake and oriented.",
                "Check for a medical ID bracelet.",
            ],
            &[
                "Do not hold the person down or restrain their movements.",
                "Do not put anything in their mouth.",
                "Do not offer food or water until they are fully alert.",
            ],
            "Epilepsy Foundation, seizure first aid",
            &["seizure", "convulsion", "epilepsy", "fit", "shaking"],
        ),
        topic(
            "anaphylaxis",
            "Anaphylaxis",
            "A severe, rapid allergic reaction with swelling, hives, and difficulty breathing.",
            &[
                "Call the local emergency number immediately.",
                "Use the person's epinephrine auto-injector at once: press it into the outer thigh and hold.",
                "Lie the person flat and raise their legs; if breathing is hard, let them sit up.",
                "Remove the trigger if possible, for example a stinger scraped off the skin.",
                "Give a second dose after 5 minutes if symptoms have not improved.",
                "If they become unresponsive and stop breathing normally, start CPR.",
            ],
            &[
                "Use the auto-injector even if you are unsure; it is safe.",
                "Keep the person lying down; standing suddenly can be fatal.",
                "Send used auto-injectors along to hospital.",
            ],
            &[
                "Do not wait to see whether symptoms improve before calling for help.",
                "Do not rely on antihistamines alone for a severe reaction.",
            ],
            "Resuscitation Council UK, anaphylaxis guidance",
            &["anaphylaxis", "allergic reaction", "allergy", "epipen", "bee sting", "hives", "swelling"],
        ),
        topic(
            "nosebleed",
            "Nosebleed",
            "Bleeding from the nose, usually from the small vessels at the front of the septum.",
            &[
                "Sit the person down and lean them slightly forward.",
                "Pinch the soft part of the nose just below the bridge for 10 to 15 minutes without releasing.",
                "Ask them to breathe through the mouth and spit out any blood.",
                "Apply a cold pack to the bridge of the nose.",
                "Seek medical help if bleeding continues beyond 30 minutes or follows a head injury.",
            ],
            &[
                "Keep the head tilted forward so blood drains out, not down the throat.",
                "Rest quietly for a few hours after the bleeding stops.",
            ],
            &[
                "Do not tilt the head back.",
                "Do not pack the nostrils with tissue or gauze.",
                "Do not blow the nose for several hours afterwards.",
            ],
            "NHS, nosebleed guidance",
            &["nosebleed", "nose bleeding", "epistaxis", "bloody nose"],
        ),
        topic(
            "drowning",
            "Drowning",
            "A person rescued from water who is unresponsive or struggling to breathe.",
            &[
                "Get the person out of the water without putting yourself in danger; reach or throw, do not go.",
                "Call the local emergency number.",
                "Check for breathing; if absent, give 5 initial rescue breaths.",
                "Begin CPR with 30 compressions followed by 2 breaths and continue cycles.",
                "If they start breathing, place them in the recovery position and keep them warm.",
            ],
            &[
                "Use a flotation aid during any water rescue.",
                "Expect vomiting during resuscitation; roll the person to clear the airway.",
                "Send every drowning victim to hospital, even after apparent recovery.",
            ],
            &[
                "Do not attempt a swimming rescue without training.",
                "Do not try to drain water from the lungs before starting CPR.",
            ],
            "International Liaison Committee on Resuscitation, drowning guidance",
            &["drowning", "water rescue", "submersion", "near drowning"],
        ),
        topic(
            "stroke",
            "Stroke",
            "A blocked or burst blood vessel in the brain; use the FAST check — Face, Arms, Speech, Time.",
            &[
                "Check the face: ask the person to smile and look for drooping on one side.",
                "Check the arms: ask them to raise both arms and watch for one drifting down.",
                "Check speech: ask them to repeat a simple sentence and listen for slurring.",
                "Call the local emergency number at once if any sign is present, and note the time symptoms began.",
                "Keep the person comfortable, lying with head and shoulders slightly raised.",
            ],
            &[
                "Record the exact time symptoms started; treatment is time critical.",
                "Reassure the person; they may understand even if they cannot speak.",
                "Be ready to start CPR if they become unresponsive and stop breathing.",
            ],
            &[
                "Do not give food, drink, or medication, including aspirin.",
                "Do not wait to see whether symptoms pass on their own.",
            ],
            "American Stroke Association, FAST warning signs",
            &["stroke", "fast", "face drooping", "slurred speech", "brain attack"],
        ),
    ]
}
